//! Conversion CLI
//!
//! ```text
//! wire20022-convert read <message.xml>
//! wire20022-convert write <MessageType> <model.json> <out.xml> [version]
//! ```
//!
//! `WIRE20022_CONFIG` names an optional TOML config file. `WIRE20022_*`
//! variables override it.

use anyhow::{bail, Context};
use wire20022::messages::{AccountReportingRequest, EndpointDetailsReport, ReturnRequest};
use wire20022::{Config, MessageKind, MessageWrapper, UniversalReader};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config()?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["read", input] => read(input),
        ["write", kind, model, output] => write(config, kind, model, output, None),
        ["write", kind, model, output, version] => write(config, kind, model, output, Some(*version)),
        _ => bail!(
            "usage: wire20022-convert read <message.xml>\n       \
             wire20022-convert write <MessageType> <model.json> <out.xml> [version]"
        ),
    }
}

fn load_config() -> anyhow::Result<Config> {
    match std::env::var("WIRE20022_CONFIG") {
        Ok(path) => Config::load(&path).with_context(|| format!("loading {}", path)),
        Err(_) => Ok(Config::from_env()?),
    }
}

fn read(input: &str) -> anyhow::Result<()> {
    let xml = wire20022::xml::read_xml_file(input)?;
    let reader = UniversalReader::new()?;
    let message = reader.read(&xml)?;

    tracing::info!(
        message_type = %message.message_type(),
        version = message.version(),
        "Read {}",
        input
    );
    println!("{}", serde_json::to_string_pretty(&message)?);
    Ok(())
}

fn write(config: Config, kind: &str, model: &str, output: &str, version: Option<&str>) -> anyhow::Result<()> {
    let json = std::fs::read(model).with_context(|| format!("failed to read {}", model))?;

    match kind {
        "AccountReportingRequest" => write_as::<AccountReportingRequest>(config, &json, output, version),
        "EndpointDetailsReport" => write_as::<EndpointDetailsReport>(config, &json, output, version),
        "ReturnRequest" => write_as::<ReturnRequest>(config, &json, output, version),
        other => bail!("unknown message type {:?}", other),
    }
}

fn write_as<K: MessageKind>(
    config: Config,
    json: &[u8],
    output: &str,
    version: Option<&str>,
) -> anyhow::Result<()> {
    let wrapper = MessageWrapper::<K>::with_config(config)?;
    let version = match version {
        Some(text) => Some(
            text.parse::<K::Version>()
                .map_err(|_| anyhow::anyhow!("unsupported {} version {:?}", K::NAME, text))?,
        ),
        None => None,
    };

    wrapper.check_required_fields(json)?;
    let model: K::Model = serde_json::from_slice(json)?;
    wrapper.write_xml_file(output, &model, version)?;
    Ok(())
}
