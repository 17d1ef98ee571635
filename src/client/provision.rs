//! Idempotent create-or-get for processor resources.

use super::ProcessorClient;
use crate::error::{Error, Result};
use crate::model::Processor;
use log::{info, warn};

/// Processor type used when the caller does not specify one.
pub const DEFAULT_PROCESSOR_TYPE: &str = "FORM_PARSER_PROCESSOR";

/// How a provisioning call resolved its processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// A new processor was created.
    Created,
    /// An existing processor with the same display name was reused.
    Reused,
}

/// Result of [`create_or_get_processor`].
#[derive(Debug, Clone)]
pub struct Provisioned {
    /// The resolved processor resource.
    pub processor: Processor,

    /// Whether the processor was created or reused.
    pub outcome: ProvisionOutcome,
}

/// Create a processor with the given display name, or reuse the existing one.
///
/// Creation is attempted first. Only a service error tagged `ALREADY_EXISTS`
/// (or HTTP 409) triggers the fallback scan of existing processors by
/// display name; every other failure cause (permission denied, quota,
/// invalid argument) propagates unchanged. Display names are matched by
/// exact string equality, which is the only uniqueness the service offers.
///
/// Calling this twice with the same display name resolves to the same
/// logical resource, with outcome `Created` then `Reused`.
pub fn create_or_get_processor(
    client: &ProcessorClient,
    display_name: &str,
    processor_type: &str,
) -> Result<Provisioned> {
    match client.create_processor(display_name, processor_type) {
        Ok(processor) => Ok(Provisioned {
            processor,
            outcome: ProvisionOutcome::Created,
        }),
        Err(err) if err.is_already_exists() => {
            info!("processor {display_name:?} already exists, looking it up");
            let processors = client.list_processors()?;
            match find_by_display_name(&processors, display_name) {
                Some(processor) => Ok(Provisioned {
                    processor: processor.clone(),
                    outcome: ProvisionOutcome::Reused,
                }),
                None => {
                    warn!("service reported {display_name:?} exists but the list has no match");
                    Err(Error::ProcessorNotFound(display_name.to_string()))
                }
            }
        }
        Err(err) => Err(err),
    }
}

fn find_by_display_name<'a>(processors: &'a [Processor], display_name: &str) -> Option<&'a Processor> {
    processors.iter().find(|p| p.display_name == display_name)
}
