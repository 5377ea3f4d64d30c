// Wed Jan 15 2026 - Alex

use super::args::{Args, Command};
use super::commands::{CommandExecutor, Context};
use crate::config::Config;
use crate::memory::ByteOrder;
use crate::utils::logging;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        let config = self.load_config(&args)?;

        if args.no_color || !config.color {
            colored::control::set_override(false);
        }
        self.setup_logging(&config);

        let ctx = Context::new(config)?;
        let executor: &dyn CommandExecutor = match &args.command {
            Command::Layout(layout_args) => layout_args,
            Command::Decode(decode_args) => decode_args,
            Command::Encode(encode_args) => encode_args,
            Command::Inspect(inspect_args) => inspect_args,
        };
        log::debug!("running {} (wire order {})", executor.name(), ctx.layouts.wire_order());
        executor.execute(&ctx)
    }

    /// Config file first, then command-line overrides.
    fn load_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(level) = &args.log_level {
            config = config.with_log_level(level.clone());
        }
        if let Some(order) = &args.wire_order {
            let order = ByteOrder::from_str_loose(order)
                .ok_or_else(|| anyhow::anyhow!("unknown byte order: {}", order))?;
            config = config.with_wire_order(order);
        }
        config.validate()?;
        Ok(config)
    }

    fn setup_logging(&self, config: &Config) {
        let level = logging::level_from_str(&config.log_level);
        if logging::init(level).is_err() {
            log::warn!("logger already initialised");
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
