//! Notepad tool definition.
//!
//! One persisted note, auto-saved on every edit.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::preferences::NotepadStore;
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotepadAction {
    #[default]
    Load,
    Save,
    Clear,
}

/// Parameters for the notepad tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NotepadParams {
    /// load, save or clear.
    #[serde(default)]
    pub action: NotepadAction,

    /// New note content, required for `save`.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct NotepadOutput {
    pub content: String,
    pub characters: usize,
}

/// Run `action` against the store and return the note afterwards.
pub fn apply(store: &NotepadStore, params: &NotepadParams) -> Result<NotepadOutput, ToolError> {
    let storage_err = |e: crate::core::storage::StorageError| ToolError::execution_failed(e.to_string());

    let content = match params.action {
        NotepadAction::Load => store.load().map_err(storage_err)?,
        NotepadAction::Save => {
            let content = params
                .content
                .clone()
                .ok_or_else(|| ToolError::invalid_arguments("Missing 'content' for save"))?;
            store.save(&content).map_err(storage_err)?;
            content
        }
        NotepadAction::Clear => {
            store.clear().map_err(storage_err)?;
            String::new()
        }
    };

    Ok(NotepadOutput {
        characters: content.chars().count(),
        content,
    })
}

/// Notepad tool.
pub struct NotepadTool;

impl NotepadTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "notepad";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Load, save or clear a persistent scratch note.";

    #[instrument(skip_all, fields(action = ?params.action))]
    pub fn execute(params: &NotepadParams, ctx: &ToolContext) -> CallToolResult {
        let outcome = apply(&ctx.notepad, params);
        if let Ok(out) = &outcome {
            info!("Notepad holds {} characters", out.characters);
        }
        into_call_result(outcome, |out| out.content.clone())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NotepadParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(context: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            async move {
                let params: NotepadParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &context))
            }
            .boxed()
        })
    }
}
