//! # SCG Error Demo
//!
//! Builds a handful of sample errors and prints their fields.
//!
//! # Usage
//!
//! ```bash
//! # Defaults
//! scg_error_demo
//!
//! # Custom normalization envelope and log level
//! scg_error_demo --config demo.toml
//!
//! # Verbose JSON logs
//! scg_error_demo -v --json
//! ```
//!
//! The optional config file has the shape:
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "scg-error-demo"
//!
//! [envelope]
//! http_status = 503
//! ```

#![deny(warnings)]

mod config;

use clap::Parser;
use config::{ConfigLoader, DemoConfig};
use scg_error::chain;
use scg_error::config::EnvelopeConfig;
use scg_error::options::{e, with_cause, with_detail, with_http_status};
use scg_error::{ContextValue, Error, MaybeError, context, ensure_with, wrap, wrap_opt};
use std::io;
use std::path::PathBuf;
use tracing::{Level, debug, error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Handle used to apply the configured log level once the config is loaded.
type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// SCG Error Demo - structured error value walkthrough
#[derive(Parser, Debug)]
#[command(name = "scg_error_demo")]
#[command(version)]
#[command(about = "Builds sample structured errors and prints their fields")]
#[command(long_about = None)]
struct Args {
    /// Optional TOML config with [shared] and [envelope] tables.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (overrides the configured level)
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let log_filter = setup_tracing(&args);

    if let Err(e) = run(&args, &log_filter) {
        error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, log_filter: &FilterHandle) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            DemoConfig::load(path)?
        }
        None => DemoConfig::default(),
    };
    config.validate()?;

    if !args.verbose {
        log_filter.reload(env_filter(config.shared.log_level.into()))?;
    }
    info!(
        service = %config.shared.service_name,
        "SCG Error Demo v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    direct_construction();
    wrapped_with_validation_fields();
    builder_options();
    normalization(&config.envelope);
    nested_chain();
    absent_handle();

    info!("SCG Error Demo done");
    Ok(())
}

fn print_error(label: &str, err: &Error) {
    println!("── {label}");
    println!("   message:     {err}");
    println!("   http_status: {}", err.http_status());
    println!("   code:        {}", err.code());
    println!("   key:         {}", err.key());
    println!("   detail:      {}", err.detail());
    match err.context() {
        Some(ctx) => {
            let mut keys: Vec<_> = ctx.keys().cloned().collect();
            keys.sort();
            for k in keys {
                println!("   context.{k}: {:?}", ctx[&k]);
            }
        }
        None => println!("   context:     <none>"),
    }
}

fn direct_construction() {
    let err = Error::new(
        404,
        "customer.not_found",
        "not_found",
        "customer 42 not found",
        Some(context! { "customer_id" => "42" }),
    );
    print_error("direct construction", &err);
}

fn wrapped_with_validation_fields() {
    let cause = io::Error::new(io::ErrorKind::NotFound, "row not found");
    let fields = vec![context! {
        "field" => "id",
        "rule" => "uuid",
        "message" => "must be a valid UUID",
    }];

    let err = wrap(cause, 404, "customer.not_found", "not_found", "customer 42 not found", None)
        .with_context_kv("customer_id", "42")
        .with_context_kv("fields", fields);
    print_error("wrap + context", &err);

    if let Some(ContextValue::List(items)) = err.context_value("fields") {
        debug!(count = items.len(), "validation issues attached");
    }
}

fn builder_options() {
    let err = e(
        "validation.failed",
        "validation",
        [
            with_http_status(400),
            with_detail("payload invalid"),
            with_cause(io::Error::new(io::ErrorKind::InvalidData, "bad json")),
        ],
    );
    print_error("builder", &err);
}

fn normalization(envelope: &EnvelopeConfig) {
    let foreign = io::Error::new(io::ErrorKind::TimedOut, "upstream timeout");
    if let Some(err) = ensure_with(Some(foreign), envelope) {
        print_error("normalized foreign error", &err);
    }

    let placeholder = wrap_opt(None, 500, "internal.error", "internal", "internal error", None);
    print_error("wrap without cause", &placeholder);
}

fn nested_chain() {
    let e1 = wrap(
        io::Error::new(io::ErrorKind::NotFound, "db not found"),
        404,
        "customer.not_found",
        "not_found",
        "customer not found",
        None,
    );
    let e2 = wrap(
        e1,
        500,
        "repository.failure",
        "internal",
        "repository failure",
        Some(context! { "op" => "CustomerRepo.Get" }),
    );
    print_error("nested chain", &e2);

    for (depth, link) in chain::iter(&e2).enumerate() {
        println!("   chain[{depth}]: {link}");
    }
    if let Some(inner) = chain::find_innermost::<Error>(&e2) {
        println!("   innermost code: {}", inner.code());
    }
}

fn absent_handle() {
    let absent = MaybeError::none().with_context_kv("ignored", true);
    println!("── absent handle");
    println!("   message:     {absent}");
    println!("   http_status: {}", absent.http_status());
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Setup tracing subscriber based on CLI arguments.
///
/// Installed before the config is read so load failures are reported. The
/// configured level is applied later through the returned handle.
fn setup_tracing(args: &Args) -> FilterHandle {
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let (filter, handle) = reload::Layer::new(env_filter(level));
    let registry = tracing_subscriber::registry().with(filter);

    if args.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
    handle
}
