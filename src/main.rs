use anyhow::Result;
use clap::Parser;
use inquire::ui::RenderConfig;

use genslang::cli::commands::{chat, configure, styles, translate};
use genslang::cli::{Args, Command, StylesCommand};
use genslang::error::exit_code_for;
use genslang::output::{self, OutputConfig};
use genslang::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_tracing(args.verbose);
    if output::is_no_color() {
        inquire::set_global_render_config(RenderConfig::empty());
    }

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Styles { command }) => match command {
            None => styles::list_styles(),
            Some(StylesCommand::Show { id }) => styles::show_style(&id)?,
        },
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat {
            style,
            model,
            endpoint,
        }) => {
            let options = chat::ChatOptions {
                style,
                endpoint,
                model,
            };
            chat::run_chat(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                style: args.style,
                model: args.model,
                endpoint: args.endpoint,
                temperature: args.temperature,
                max_tokens: args.max_tokens,
                format: args.format,
                output: args.output,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
