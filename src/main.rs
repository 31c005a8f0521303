use clap::Parser;
use greeting_sink::adapters::events::{decode_events, PayloadFormat};
use greeting_sink::adapters::http::{HttpRequest, HttpResponse, Method};
use greeting_sink::adapters::log::TracingLog;
use greeting_sink::app::functions::{
    greeting_service, local_sink, BATCH_FUNCTION_NAME, HTTP_FUNCTION_NAME,
};
use greeting_sink::config::cli::{Command, GreetArgs, IngestArgs};
use greeting_sink::utils::logger::{self, LogFormat};
use greeting_sink::{
    CliConfig, EventBatchFunction, Function, FunctionError, FunctionSettings, GreetingResolver,
    HttpGreetingFunction,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Settings: {:?}", settings);

    let succeeded = match &cli.command {
        Command::Greet(args) => greet(&settings, args).await,
        Command::Ingest(args) => match ingest(&settings, args).await {
            Ok(succeeded) => succeeded,
            Err(e) => {
                tracing::error!("❌ Batch ingestion failed: {}", e);
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                false
            }
        },
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

async fn greet(settings: &FunctionSettings, args: &GreetArgs) -> bool {
    let response = match args.method.parse::<Method>() {
        Ok(method) => {
            let mut request = HttpRequest::new(method);
            if let Some(name) = &args.name {
                request = request.with_query("name", name.as_str());
            }
            if let Some(body) = &args.body {
                request = request.with_body(body.as_str());
            }

            let function = HttpGreetingFunction::new(
                GreetingResolver::new(greeting_service(settings)),
                TracingLog::new(HTTP_FUNCTION_NAME),
            );
            function.invoke(request).await
        }
        Err(e) => {
            tracing::warn!("⚠️ {}", e);
            HttpResponse::method_not_allowed(&args.method)
        }
    };

    println!("{}", response.status);
    println!("{}", response.body);
    response.status.is_success()
}

async fn ingest(settings: &FunctionSettings, args: &IngestArgs) -> Result<bool, FunctionError> {
    let format: PayloadFormat = args.format.parse()?;
    let payload = tokio::fs::read_to_string(&args.input).await?;
    let events = decode_events(&payload, format)?;

    let function = EventBatchFunction::new(local_sink(settings, TracingLog::new(BATCH_FUNCTION_NAME)));
    let report = function.handle_events(events).await;

    for outcome in &report.outcomes {
        match (&outcome.key, &outcome.error) {
            (_, Some(error)) => println!("#{} ❌ {}", outcome.message_index, error),
            (Some(key), None) => println!("#{} ✅ {}", outcome.message_index, key),
            (None, None) => println!("#{} logged", outcome.message_index),
        }
    }
    println!(
        "✅ {} messages processed, {} blobs written, {} failed",
        report.outcomes.len(),
        report.written,
        report.failed
    );

    Ok(!report.has_failures())
}
