//! Logging for cosmicctl
//!
//! Logs always go to stderr so `config show` and `completions` output can be
//! piped. `RUST_LOG` wins over `--debug`. With the `telemetry` feature,
//! `--otel` adds an OTLP span exporter next to the console layer; the
//! endpoint comes from `OTEL_EXPORTER_OTLP_ENDPOINT`.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

fn env_filter(debug: bool) -> EnvFilter {
    let fallback = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber for this process.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = fmt::layer()
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact();
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(config.debug))
        .with(console);

    #[cfg(feature = "telemetry")]
    if config.otel {
        let (layer, endpoint) = otlp::layer()?;
        subscriber
            .with(layer)
            .try_init()
            .context("installing tracing subscriber")?;
        tracing::info!(%endpoint, "exporting spans over OTLP");
        return Ok(());
    }

    subscriber
        .try_init()
        .context("installing tracing subscriber")?;

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        tracing::warn!("built without the `telemetry` feature; --otel ignored");
    }

    Ok(())
}

#[cfg(feature = "telemetry")]
mod otlp {
    use anyhow::{Context, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};
    use opentelemetry_sdk::Resource;
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    const SERVICE_NAME: &str = "cosmicctl";

    pub fn layer<S>() -> Result<(OpenTelemetryLayer<S, Tracer>, String)>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4317".to_string());

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build()
            .context("building OTLP span exporter")?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_resource(Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]))
            .build();
        let tracer = provider.tracer(SERVICE_NAME);
        let _ = opentelemetry::global::set_tracer_provider(provider);

        Ok((tracing_opentelemetry::layer().with_tracer(tracer), endpoint))
    }
}

/// Flush pending spans before exit.
pub fn shutdown_otel() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
