//! Stopwatch tool definition.
//!
//! Stopwatches live in the tool context, one per caller-chosen id, so two
//! clients only share timing when they send the same id. Time is measured
//! with a monotonic clock; callers only send commands and read the display.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::super::common::{error_result, parse_route_params, structured_result};
use crate::domains::tools::context::ToolContext;

/// Accumulated time plus the start of the current run, if running.
#[derive(Debug, Default, Clone)]
pub struct Stopwatch {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop_at(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started);
        }
    }

    pub fn toggle_at(&mut self, now: Instant) {
        if self.is_running() {
            self.stop_at(now);
        } else {
            self.start_at(now);
        }
    }

    /// Zero the clock and stop it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default();
        self.accumulated + running
    }
}

/// Format elapsed time as `MM:SS.CC`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let centis = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StopwatchAction {
    Start,
    Stop,
    Toggle,
    Reset,
    #[default]
    Read,
}

const MAX_ID_LEN: usize = 64;

fn default_id() -> String {
    "default".to_string()
}

/// Parameters for the stopwatch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StopwatchParams {
    /// start, stop, toggle, reset or read.
    #[serde(default)]
    pub action: StopwatchAction,

    /// Which stopwatch to drive (1-64 characters, default "default").
    #[serde(default = "default_id")]
    pub id: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct StopwatchReading {
    pub display: String,
    pub elapsed_ms: u64,
    pub running: bool,
}

/// Apply `action` at `now` and return the resulting reading.
pub fn apply(stopwatch: &mut Stopwatch, action: StopwatchAction, now: Instant) -> StopwatchReading {
    match action {
        StopwatchAction::Start => stopwatch.start_at(now),
        StopwatchAction::Stop => stopwatch.stop_at(now),
        StopwatchAction::Toggle => stopwatch.toggle_at(now),
        StopwatchAction::Reset => stopwatch.reset(),
        StopwatchAction::Read => {}
    }
    let elapsed = stopwatch.elapsed_at(now);
    StopwatchReading {
        display: format_elapsed(elapsed),
        elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        running: stopwatch.is_running(),
    }
}

/// Stopwatch tool.
pub struct StopwatchTool;

impl StopwatchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "stopwatch";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Control a stopwatch (start, stop, toggle, reset) or read it. Pass an id to keep your own stopwatch. Time is shown as MM:SS.CC.";

    #[instrument(skip_all, fields(action = ?params.action, id = %params.id))]
    pub fn execute(params: &StopwatchParams, ctx: &ToolContext) -> CallToolResult {
        let id = params.id.trim();
        if id.is_empty() || id.chars().count() > MAX_ID_LEN {
            return error_result(format!(
                "Stopwatch id must be 1-{} characters",
                MAX_ID_LEN
            ));
        }

        let mut stopwatches = match ctx.stopwatches.lock() {
            Ok(guard) => guard,
            Err(_) => return error_result("Stopwatch state is unavailable"),
        };
        let reading = apply(
            stopwatches.entry(id.to_string()).or_default(),
            params.action,
            Instant::now(),
        );
        // A reset stopwatch is indistinguishable from a fresh one.
        if params.action == StopwatchAction::Reset {
            stopwatches.remove(id);
        }
        debug!("Stopwatch '{}' at {}", id, reading.display);
        structured_result(reading.display.clone(), &reading)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<StopwatchParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<StopwatchReading>().into()),
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
                let params: StopwatchParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &context))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00.00");
        assert_eq!(format_elapsed(Duration::from_millis(61_234)), "01:01.23");
        assert_eq!(format_elapsed(Duration::from_millis(6_000_000)), "100:00.00");
    }

    #[test]
    fn test_start_stop_accumulates() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        apply(&mut sw, StopwatchAction::Start, t0);
        let reading = apply(&mut sw, StopwatchAction::Stop, t0 + Duration::from_millis(1500));
        assert_eq!(reading.elapsed_ms, 1500);
        assert!(!reading.running);

        // Stopped time does not count.
        apply(&mut sw, StopwatchAction::Toggle, t0 + Duration::from_secs(10));
        let reading = apply(&mut sw, StopwatchAction::Read, t0 + Duration::from_millis(10_250));
        assert_eq!(reading.elapsed_ms, 1750);
        assert!(reading.running);
        assert_eq!(reading.display, "00:01.75");
    }

    #[test]
    fn test_double_start_keeps_first_start() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start_at(t0);
        sw.start_at(t0 + Duration::from_secs(5));
        assert_eq!(sw.elapsed_at(t0 + Duration::from_secs(6)), Duration::from_secs(6));
    }

    #[test]
    fn test_reset() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start_at(t0);
        let reading = apply(&mut sw, StopwatchAction::Reset, t0 + Duration::from_secs(3));
        assert_eq!(reading.elapsed_ms, 0);
        assert!(!reading.running);
    }

    fn params(action: StopwatchAction, id: &str) -> StopwatchParams {
        StopwatchParams {
            action,
            id: id.to_string(),
        }
    }

    fn running(result: CallToolResult) -> bool {
        result.structured_content.unwrap()["running"].as_bool().unwrap()
    }

    #[test]
    fn test_execute_keeps_state_per_id() {
        let ctx = ToolContext::for_tests();
        StopwatchTool::execute(&params(StopwatchAction::Start, "alice"), &ctx);
        assert!(ctx.stopwatches.lock().unwrap()["alice"].is_running());

        // Another caller's reset leaves alice running.
        let result = StopwatchTool::execute(&params(StopwatchAction::Reset, "bob"), &ctx);
        assert_eq!(result.structured_content.unwrap()["display"], "00:00.00");
        assert!(running(StopwatchTool::execute(
            &params(StopwatchAction::Read, "alice"),
            &ctx
        )));

        let result = StopwatchTool::execute(&params(StopwatchAction::Reset, "alice"), &ctx);
        assert!(!running(result));
        assert!(ctx.stopwatches.lock().unwrap().is_empty());
    }

    #[test]
    fn test_default_id() {
        let params: StopwatchParams =
            serde_json::from_value(serde_json::json!({ "action": "start" })).unwrap();
        assert_eq!(params.id, "default");
    }

    #[test]
    fn test_rejects_bad_id() {
        let ctx = ToolContext::for_tests();
        let result = StopwatchTool::execute(&params(StopwatchAction::Start, "  "), &ctx);
        assert_eq!(result.is_error, Some(true));
        let result = StopwatchTool::execute(&params(StopwatchAction::Start, &"x".repeat(65)), &ctx);
        assert_eq!(result.is_error, Some(true));
    }
}
