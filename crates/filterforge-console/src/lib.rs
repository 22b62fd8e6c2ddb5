//! Colorful console output for filter rewrites.
//!
//! Provides a custom `tracing` layer that formats rewrite events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Pass summaries (one line per rewrite pass that changed something)
//! - **DEBUG**: Individual relation rewrites
//! - **TRACE**: Removals, replacements and LIKE pattern compilation

use filterforge_config::LoggingConfig;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output at the default `info` level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&LoggingConfig::default());
}

/// Initializes console output at the level from `config`.
///
/// When `RUST_LOG` is set it replaces the configured level for every target.
/// Safe to call multiple times - only the first call has effect.
pub fn init_with(config: &LoggingConfig) {
    INIT.get_or_init(|| {
        let level = config.level_or_default().to_ascii_lowercase();

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = console_filter(rust_log.as_deref(), &level);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RewriteConsoleLayer)
            .try_init();
    });
}

fn console_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| {
            EnvFilter::default()
                .add_directive(directive("filterforge_rewrite", level))
                .add_directive(directive("filterforge_filter", level))
        })
}

fn directive(target: &str, level: &str) -> Directive {
    format!("{}={}", target, level)
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

/// A tracing layer that formats rewrite events with colors.
pub struct RewriteConsoleLayer;

impl<S: Subscriber> Layer<S> for RewriteConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from filter modules
        if !target.starts_with("filterforge_rewrite")
            && !target.starts_with("filterforge_filter")
            && !target.starts_with("filterforge::")
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    entity: Option<String>,
    attribute: Option<String>,
    kind: Option<String>,
    action: Option<String>,
    replacement: Option<String>,
    path: Option<String>,
    paths: Option<String>,
    pattern: Option<String>,
    count: Option<u64>,
    rewritten: Option<u64>,
    removed: Option<u64>,
    replaced: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "entity" => self.entity = Some(s),
            "attribute" => self.attribute = Some(s),
            "kind" => self.kind = Some(s),
            "action" => self.action = Some(s),
            "replacement" => self.replacement = Some(s),
            "path" => self.path = Some(s),
            "paths" => self.paths = Some(s),
            "pattern" => self.pattern = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "count" => self.count = Some(value),
            "rewritten" => self.rewritten = Some(value),
            "removed" => self.removed = Some(value),
            "replaced" => self.replaced = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_debug(field, &value);
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "rewrite_relation" => format_rewrite_relation(v),
        "rewrite_end" => format_rewrite_end(v),
        "filters_removed" | "filters_replaced" | "like_compiled" => format_trace(v, level),
        _ => String::new(),
    }
}

fn format_rewrite_relation(v: &EventVisitor) -> String {
    let attribute = v.attribute.as_deref().unwrap_or("?");
    let kind = v.kind.as_deref().unwrap_or("?");
    let count = v.count.unwrap_or(0);

    match v.action.as_deref() {
        Some("drop") => format!(
            "{} {} {} dropped │ {} {}",
            "✗".bright_red(),
            attribute.white().bold(),
            format!("({})", kind).bright_black(),
            count.bright_yellow(),
            plural(count, "filter"),
        ),
        _ => format!(
            "{} {} {} → {} │ {} {}",
            "↻".bright_blue(),
            attribute.white().bold(),
            format!("({})", kind).bright_black(),
            v.replacement.as_deref().unwrap_or("?").bright_cyan(),
            count.bright_yellow(),
            plural(count, "filter"),
        ),
    }
}

fn format_rewrite_end(v: &EventVisitor) -> String {
    let entity = v.entity.as_deref().unwrap_or("?");
    let rewritten = v.rewritten.unwrap_or(0);
    let removed = v.removed.unwrap_or(0);

    format!(
        "{} Rewrite complete │ {} │ {} rewritten │ {} removed",
        "■".bright_cyan().bold(),
        entity.white().bold(),
        rewritten.bright_green().bold(),
        removed.bright_red().bold(),
    )
}

fn format_trace(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let line = match v.event.as_deref() {
        Some("filters_removed") => format!(
            "  removed {} on {}",
            v.removed.unwrap_or(0),
            v.paths.as_deref().unwrap_or("?")
        ),
        Some("filters_replaced") => format!(
            "  replaced {} on {} with {}",
            v.replaced.unwrap_or(0),
            v.path.as_deref().unwrap_or("?"),
            v.replacement.as_deref().unwrap_or("?")
        ),
        _ => format!("  compiled LIKE '{}'", v.pattern.as_deref().unwrap_or("")),
    };
    line.bright_black().to_string()
}

fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
