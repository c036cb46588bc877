use std::sync::Arc;

use serenity::all::Client;

use crate::bot::handler::Handler;
use crate::bot::notify::ShutdownNotifier;
use crate::cli::LaunchOptions;
use crate::command::CommandRegistry;
use crate::config::{self, Config};
use crate::error::{
    auth::AuthError, config::ConfigError, extension::ExtensionLoadError, AppError,
};
use crate::extension::{self, ExtensionRegistry};
use crate::logging::{BotLogger, LogConfig};
use crate::model::{capability::CapabilitySet, metadata::BotMetadata};

/// One bot, configured and ready to connect.
///
/// Owns the bot's logger and its shutdown notifier. Dropping a `Bootstrapper`,
/// at any point after construction, sends the shutdown notice.
pub struct Bootstrapper {
    metadata: BotMetadata,
    capabilities: CapabilitySet,
    logger: BotLogger,
    commands: CommandRegistry,
    extensions: Vec<String>,
    notifier: ShutdownNotifier,
}

impl Bootstrapper {
    /// Configures a bot from validated metadata.
    ///
    /// Derives the capability request, opens the log file described by
    /// `log_config` (truncating any previous run) and arms the shutdown notifier.
    ///
    /// # Arguments
    /// - `metadata` - Validated bot metadata
    /// - `log_config` - Log destination and level for this bot
    /// - `crash_webhook_url` - Webhook for the shutdown notice, if any
    ///
    /// # Returns
    /// - `Ok(Bootstrapper)` - Bot ready for extension loading
    /// - `Err(ConfigError::LogDestination)` - Log file could not be created
    pub fn new(
        metadata: BotMetadata,
        log_config: LogConfig,
        crash_webhook_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let capabilities = CapabilitySet::derive(&metadata.intents);
        let logger = log_config.open()?;

        logger.in_scope(|| {
            for intent in CapabilitySet::unrecognized(&metadata.intents) {
                tracing::warn!("Ignoring unrecognized intent '{}'", intent);
            }
            tracing::info!(
                "Configured {} with capabilities {:?}",
                metadata.name,
                capabilities.iter().collect::<Vec<_>>()
            );
        });

        let notifier = ShutdownNotifier::new(
            metadata.name.clone(),
            crash_webhook_url,
            logger.dispatch().clone(),
        );

        Ok(Self {
            commands: CommandRegistry::new(metadata.command_prefix.clone()),
            metadata,
            capabilities,
            logger,
            extensions: Vec::new(),
            notifier,
        })
    }

    pub fn metadata(&self) -> &BotMetadata {
        &self.metadata
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn logger(&self) -> &BotLogger {
        &self.logger
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Identifiers of the extensions loaded so far, in load order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Loads extensions into this bot, stopping at the first failure.
    ///
    /// See [`extension::load_extensions`]. The failure is also written to the
    /// bot's log.
    pub fn load_extensions<S: AsRef<str>>(
        &mut self,
        registry: &ExtensionRegistry,
        ids: &[S],
    ) -> Result<(), ExtensionLoadError> {
        let commands = &mut self.commands;
        let result = self
            .logger
            .in_scope(|| extension::load_extensions(registry, ids, commands));

        match result {
            Ok(loaded) => {
                self.extensions.extend(loaded);
                Ok(())
            }
            Err(e) => {
                self.logger.in_scope(|| tracing::error!("{}", e));
                Err(e)
            }
        }
    }

    /// Connects to Discord and runs the client until it disconnects.
    ///
    /// A Ctrl-C shuts all shards down gracefully so this returns and the
    /// shutdown notice is sent.
    ///
    /// # Returns
    /// - `Ok(())` - Client shut down
    /// - `Err(AppError::AuthErr)` - Discord rejected the token
    /// - `Err(AppError::DiscordErr)` - Any other client failure
    pub async fn run(self, token: &str) -> Result<(), AppError> {
        let Bootstrapper {
            metadata,
            capabilities,
            logger: _logger,
            commands,
            extensions: _,
            notifier,
        } = self;

        let handler = Handler::new(metadata.name.clone(), Arc::new(commands));

        let mut client = Client::builder(token, capabilities.gateway_intents())
            .event_handler(handler)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received shutdown signal, disconnecting");
                shard_manager.shutdown_all().await;
            }
        });

        tracing::info!("Starting {}...", metadata.name);

        let result = client.start().await.map_err(AppError::from);

        tracing::info!("{} disconnected", metadata.name);
        drop(notifier);

        result
    }
}

/// Reads the bot token from the environment variable named in metadata.
///
/// # Returns
/// - `Ok(String)` - Token
/// - `Err(AuthError::MissingToken)` - Variable unset or blank
pub fn resolve_token(token_env: &str) -> Result<String, AuthError> {
    match std::env::var(token_env) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken(token_env.to_string())),
    }
}

/// Runs every startup step short of connecting.
///
/// Loads metadata, configures the bot, loads extensions and resolves the
/// token. Any failure aborts before a client is built. Does not touch
/// process-wide logging.
///
/// # Returns
/// - `Ok((Bootstrapper, String))` - Configured bot and its token
/// - `Err(AppError)` - Config, extension, or token failure
pub fn prepare(
    options: &LaunchOptions,
    config: Config,
    registry: &ExtensionRegistry,
) -> Result<(Bootstrapper, String), AppError> {
    let metadata = BotMetadata::load(&options.metadata_path)?;
    let log_config = LogConfig::for_bot(&config.log_root, &metadata.name);

    let mut bot = Bootstrapper::new(metadata, log_config, config.crash_webhook_url)?;
    bot.load_extensions(registry, &options.cog_paths)?;

    let token = resolve_token(&bot.metadata().token_env)?;

    Ok((bot, token))
}

/// Launches a bot and blocks until it shuts down.
///
/// This is the process entry point: it loads `.env`, reads configuration,
/// installs the bot's logger process-wide, and runs the client.
pub async fn start(options: LaunchOptions, registry: &ExtensionRegistry) -> Result<(), AppError> {
    println!("Launching bot...");

    config::load_dotenv(&options.dotenv_path)?;
    let config = Config::from_env();

    let (bot, token) = prepare(&options, config, registry)?;
    bot.logger().install_global()?;

    bot.run(&token).await
}
