//! Password generator tool definition.
//!
//! Draws characters uniformly from the union of the selected classes using a
//! non-cryptographic generator.

use futures::FutureExt;
use rand::Rng;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::tools::ToolError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Parameters for the password generator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PasswordGeneratorParams {
    /// Password length (4-64).
    #[serde(default = "default_length")]
    pub length: usize,

    /// Include A-Z.
    #[serde(default = "enabled")]
    pub uppercase: bool,

    /// Include a-z.
    #[serde(default = "enabled")]
    pub lowercase: bool,

    /// Include 0-9.
    #[serde(default = "enabled")]
    pub numbers: bool,

    /// Include punctuation symbols.
    #[serde(default = "enabled")]
    pub symbols: bool,
}

fn default_length() -> usize {
    16
}

fn enabled() -> bool {
    true
}

impl Default for PasswordGeneratorParams {
    fn default() -> Self {
        Self {
            length: default_length(),
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PasswordOutput {
    pub password: String,
    pub length: usize,
    /// Size of the character pool the password was drawn from.
    pub pool_size: usize,
}

fn charset(params: &PasswordGeneratorParams) -> Vec<char> {
    [
        (params.uppercase, UPPERCASE),
        (params.lowercase, LOWERCASE),
        (params.numbers, NUMBERS),
        (params.symbols, SYMBOLS),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .flat_map(|(_, chars)| chars.chars())
    .collect()
}

/// Generate a password using the supplied random source.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    params: &PasswordGeneratorParams,
) -> Result<PasswordOutput, ToolError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&params.length) {
        return Err(ToolError::invalid_arguments(format!(
            "Length must be between {} and {}",
            MIN_LENGTH, MAX_LENGTH
        )));
    }

    let pool = charset(params);
    if pool.is_empty() {
        return Err(ToolError::invalid_arguments(
            "Select at least one character set!",
        ));
    }

    let password = (0..params.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    Ok(PasswordOutput {
        password,
        length: params.length,
        pool_size: pool.len(),
    })
}

/// Password generator tool.
pub struct PasswordGeneratorTool;

impl PasswordGeneratorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "password_generator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a random password of 4-64 characters from uppercase, lowercase, number and symbol classes.";

    #[instrument(skip_all, fields(length = params.length))]
    pub fn execute(params: &PasswordGeneratorParams) -> CallToolResult {
        let outcome = generate_with(&mut rand::thread_rng(), params);
        if let Ok(out) = &outcome {
            info!("Generated password from a pool of {}", out.pool_size);
        }
        into_call_result(outcome, |out| out.password.clone())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<PasswordGeneratorParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<PasswordOutput>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: PasswordGeneratorParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_numbers(length: usize) -> PasswordGeneratorParams {
        PasswordGeneratorParams {
            length,
            uppercase: false,
            lowercase: false,
            numbers: true,
            symbols: false,
        }
    }

    #[test]
    fn test_numbers_only() {
        let out = generate_with(&mut rand::thread_rng(), &only_numbers(8)).unwrap();
        assert_eq!(out.password.len(), 8);
        assert!(out.password.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(out.pool_size, 10);
    }

    #[test]
    fn test_every_length_and_class_combination() {
        let mut rng = rand::thread_rng();
        for mask in 1u8..16 {
            let params = PasswordGeneratorParams {
                length: 4 + (mask as usize * 4) % 61,
                uppercase: mask & 1 != 0,
                lowercase: mask & 2 != 0,
                numbers: mask & 4 != 0,
                symbols: mask & 8 != 0,
            };
            let pool = charset(&params);
            let out = generate_with(&mut rng, &params).unwrap();
            assert_eq!(out.password.chars().count(), params.length);
            assert!(out.password.chars().all(|c| pool.contains(&c)));
        }
    }

    #[test]
    fn test_no_class_selected() {
        let params = PasswordGeneratorParams {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            ..Default::default()
        };
        let err = generate_with(&mut rand::thread_rng(), &params).unwrap_err();
        assert!(err.to_string().contains("Select at least one character set!"));
    }

    #[test]
    fn test_length_bounds() {
        let mut rng = rand::thread_rng();
        assert!(generate_with(&mut rng, &only_numbers(3)).is_err());
        assert!(generate_with(&mut rng, &only_numbers(65)).is_err());
        assert!(generate_with(&mut rng, &only_numbers(4)).is_ok());
        assert!(generate_with(&mut rng, &only_numbers(64)).is_ok());
    }

    #[test]
    fn test_defaults() {
        let params: PasswordGeneratorParams =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.length, 16);
        let result = PasswordGeneratorTool::execute(&params);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content.unwrap()["password"]
                .as_str()
                .unwrap()
                .len(),
            16
        );
    }
}
