use std::{env, str::FromStr};

use termcolor::ColorChoice;

#[derive(Debug, Clone)]
pub struct GlobalSettings {
    pub colorize: ColorChoice,
    pub log_level: log::LevelFilter,
}

impl GlobalSettings {
    pub fn from_env() -> Self {
        let colorize = env::var("OPAL_COLORIZE")
            .ok()
            .and_then(|var| ColorChoice::from_str(&var).ok())
            .unwrap_or(ColorChoice::Auto);

        let colorize = respect_no_color(colorize, env::var_os("NO_COLOR").is_some());

        let log_level = env::var("OPAL_LOG_LEVEL")
            .ok()
            .and_then(|var| log::LevelFilter::from_str(&var.to_uppercase()).ok())
            .unwrap_or(log::LevelFilter::Warn);

        Self { colorize, log_level }
    }

    /// Install the logger and the handler which renders error reports.
    pub fn install(&self) -> miette::Result<()> {
        env_logger::Builder::new().filter_level(self.log_level).format_timestamp(None).init();

        let colorize = self.colorize;
        miette::set_hook(Box::new(move |_| -> Box<dyn miette::ReportHandler> {
            let opts = miette::MietteHandlerOpts::new();
            let opts = match colorize {
                ColorChoice::Always | ColorChoice::AlwaysAnsi => opts.color(true),
                ColorChoice::Never => opts.color(false),
                ColorChoice::Auto => opts,
            };
            Box::new(opts.build())
        }))?;
        Ok(())
    }
}

/// `NO_COLOR` only overrides the automatic choice.
fn respect_no_color(colorize: ColorChoice, no_color: bool) -> ColorChoice {
    match colorize {
        ColorChoice::Auto if no_color => ColorChoice::Never,
        colorize => colorize,
    }
}
