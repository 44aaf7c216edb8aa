use clap::{Arg, Command};
use std::env;

use llm_translate::{
    ChatCompletionProvider, DEFAULT_ENDPOINT, MockMode, MockTransport, ProviderOptions,
    TranslateQuery,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("llm-translate")
        .version("0.1.0")
        .about("Translate text through an OpenAI-compatible chat completion API")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target-language")
                .help("Target language code (e.g., fr, ja, zh-Hans)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source-language")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .help("API endpoint, scheme optional (default: OPENAI_API_URL or api.openai.com)"),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .short('p')
                .help("Custom user prompt template; $text, $sourceLang and $targetLang are substituted"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use a canned response instead of the network")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let target_language = matches.get_one::<String>("target-language").unwrap();
    let source_language = matches.get_one::<String>("source-language").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.parse().unwrap()),
        )
        .init();

    if verbose {
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {} → {}", source_language, target_language);
        println!();
    }

    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .or_else(|| env::var("OPENAI_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let query = TranslateQuery::new(text, source_language, target_language);

    let result = if use_mock {
        // Canned suffix response, keeps the full pipeline observable offline
        let canned = serde_json::json!({
            "choices": [{"message": {"content": format!("{}_{}", text, target_language)}}]
        })
        .to_string();
        let mut options = ProviderOptions::new("mock-key", &endpoint);
        if let Some(template) = matches.get_one::<String>("prompt") {
            options = options.with_custom_prompt(template);
        }
        let transport = MockTransport::new(MockMode::Respond {
            status: 200,
            body: canned,
        });
        let provider = ChatCompletionProvider::with_transport(options, transport);
        provider.translate(&query).await
    } else {
        if env::var("OPENAI_API_KEY").is_err() {
            eprintln!("❌ OPENAI_API_KEY environment variable not set");
            eprintln!("   Set it with: export OPENAI_API_KEY=your_api_key");
            eprintln!("   Or use --mock to run without the network");
            return Err("Missing API key".into());
        }

        let mut options = ProviderOptions::new(&env::var("OPENAI_API_KEY")?, &endpoint);
        if let Some(template) = matches.get_one::<String>("prompt") {
            options = options.with_custom_prompt(template);
        }
        let provider = ChatCompletionProvider::new(options)?;
        provider.translate(&query).await
    };

    match result {
        Ok(translation) => {
            println!("{}", translation.paragraphs.join("\n"));
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            if verbose {
                eprintln!("   detail: {}", e.detail());
            }
            Err(e.into())
        }
    }
}
