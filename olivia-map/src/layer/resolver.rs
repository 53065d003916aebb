//! Base layer resolution.

use super::catalog::{self, CUSTOM_ID};
use super::error::ResolutionError;
use super::types::{LayerConfig, LayerDescriptor, LayerOptions, OptionValue};
use crate::notify::Notifier;
use tracing::{debug, info};

/// Resolves a base layer config into a renderable descriptor.
///
/// Every configured boolean flag ends up explicitly `true` or `false`; a flag
/// with no value becomes `false`, and flags that were never configured are not
/// added. A custom layer takes its URL template from the config and has no
/// CRS. A built-in layer keeps its id, URL template and CRS and gets the flags
/// on top of its default options.
///
/// Pure: the same config always gives the same result.
///
/// # Errors
///
/// - [`ResolutionError::MissingCustomUrl`] for a custom layer with an empty or
///   missing URL template
/// - [`ResolutionError::UnknownLayerId`] when the id is neither built-in nor
///   custom (ids are compared exactly)
pub fn resolve(config: &LayerConfig) -> Result<LayerDescriptor, ResolutionError> {
    let flags = normalized_flags(config);

    if config.id == CUSTOM_ID {
        let url_template = config
            .custom_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ResolutionError::MissingCustomUrl)?;

        return Ok(LayerDescriptor {
            id: CUSTOM_ID.to_string(),
            url_template: url_template.to_string(),
            crs: None,
            options: flags,
        });
    }

    let builtin = catalog::find(&config.id).ok_or_else(|| ResolutionError::UnknownLayerId {
        id: config.id.clone(),
    })?;

    let mut descriptor = builtin.descriptor();
    descriptor.options.extend(flags);
    Ok(descriptor)
}

/// [`resolve`], reporting a failure to the user before returning it.
pub fn resolve_and_notify(
    config: &LayerConfig,
    notifier: &dyn Notifier,
) -> Result<LayerDescriptor, ResolutionError> {
    match resolve(config) {
        Ok(descriptor) => {
            info!(
                id = %descriptor.id,
                crs = ?descriptor.crs,
                "Resolved base layer"
            );
            Ok(descriptor)
        }
        Err(e) => {
            notifier.notify(&e.notice());
            Err(e)
        }
    }
}

fn normalized_flags(config: &LayerConfig) -> LayerOptions {
    let Some(flags) = config.bool_flags() else {
        return LayerOptions::new();
    };

    flags
        .iter()
        .map(|(name, value)| {
            if value.is_none() {
                debug!(flag = %name, "Base layer flag has no value, using false");
            }
            (name.clone(), OptionValue::Bool(value.unwrap_or(false)))
        })
        .collect()
}
