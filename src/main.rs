use anyhow::Context;
use clap::Parser;
use uxr_ds::config::cli::{parse_arg, Command};
use uxr_ds::utils::{logger, validation::Validate};
use uxr_ds::{func_map_with, CliConfig, DsConfig, Pagination};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => DsConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DsConfig::default(),
    };

    logger::init_from_config(&config.logging, cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    let formatter = config.time_formatter()?;
    let funcs = func_map_with(&formatter);

    match cli.command {
        Command::Call { name, args } => {
            let args: Vec<_> = args.iter().map(String::as_str).map(parse_arg).collect();
            tracing::debug!("calling {} with {} argument(s)", name, args.len());
            let result = funcs.call(&name, &args)?;
            match result {
                serde_json::Value::String(s) => println!("{}", s),
                other => println!("{}", serde_json::to_string_pretty(&other)?),
            }
        }
        Command::Paginate { current, total } => {
            let pagination = Pagination::new(current, total);
            let rendered: Vec<String> = pagination
                .page_numbers
                .iter()
                .enumerate()
                .map(|(i, page)| {
                    let label = if pagination.is_current(*page) {
                        format!("[{}]", page)
                    } else {
                        page.to_string()
                    };
                    if pagination.gap_before(i) {
                        format!("… {}", label)
                    } else {
                        label
                    }
                })
                .collect();
            println!("{}", rendered.join(" "));
        }
        Command::List => {
            for name in funcs.names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
