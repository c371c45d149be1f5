use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::task::JoinHandle;
use twilight_gateway::{
    CloseFrame, Config as ShardConfig, Event, EventTypeFlags, Intents, MessageSender, Shard,
    StreamExt, error::StartRecommendedError,
};
use twilight_http::{Client, client::ClientBuilder};

use crate::{
    core::{
        config::Config,
        model::{BotState, CacheAware, OwnedBotState},
        traced,
    },
    error::runner::{StartError, WaitForSignalError, WaitUntilShutdownError},
    gateway::{self, LastCachedStates},
};

const INTENTS: Intents = Intents::GUILDS.union(Intents::GUILD_VOICE_STATES);

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

fn build_http_client(token: &str) -> Client {
    ClientBuilder::default().token(token.to_owned()).build()
}

pub async fn start(config: Config) -> Result<(), StartError> {
    tracing::debug!("began starting the bot");

    let (token, policy) = config.into_parts();
    let http = build_http_client(&token);
    let user_id = http.current_user().await?.model().await?.id;

    let shards = build_and_split_shards(&http, &token).await?;
    let shards_len = shards.len();
    let mut senders = Vec::with_capacity(shards_len);
    let mut tasks = Vec::with_capacity(shards_len);
    let bot = Arc::new(BotState::new(http, user_id, policy));

    for shard in shards {
        senders.push(shard.sender());
        tasks.push(tokio::spawn(handle_gateway_events(shard, bot.clone())));
    }

    Ok(wait_until_shutdown(senders, tasks).await?)
}

async fn build_and_split_shards(
    client: &Client,
    token: &str,
) -> Result<impl ExactSizeIterator<Item = Shard> + use<>, StartRecommendedError> {
    let shard_config = ShardConfig::new(token.to_owned(), INTENTS);
    let shards =
        twilight_gateway::create_recommended(client, shard_config, |_, builder| builder.build())
            .await?;
    Ok(shards)
}

#[tracing::instrument(skip_all, name = "gateway")]
async fn handle_gateway_events(mut shard: Shard, bot: OwnedBotState) {
    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(Event::GatewayClose(_)) if SHUTDOWN.load(Ordering::Relaxed) => break,
            Ok(event) => event,
            Err(source) => {
                tracing::warn!(?source, "error receiving event");

                continue;
            }
        };

        tracing::trace!(?event, shard = ?shard.id(), "received event");
        process_gateway_events(&shard, event, bot.clone());
    }
}

fn process_gateway_events(shard: &Shard, event: Event, bot: OwnedBotState) {
    let states = LastCachedStates::new(bot.cache(), &event);

    bot.cache().update(&event);

    traced::tokio_spawn(event.kind(), gateway::process(bot, event, states, shard.id()));
}

#[tracing::instrument]
async fn wait_for_signal() -> Result<(), WaitForSignalError> {
    #[cfg(target_family = "unix")]
    {
        use tokio::signal::unix::{self, SignalKind};

        let mut sigint = unix::signal(SignalKind::interrupt())?;
        let mut sigterm = unix::signal(SignalKind::terminate())?;

        tokio::select! {
            _ = sigint.recv() => tracing::debug!("received SIGINT"),
            _ = sigterm.recv() => tracing::debug!("received SIGTERM"),
        }
    }

    #[cfg(not(target_family = "unix"))]
    {
        use tokio::signal;

        signal::ctrl_c().await?;
    }

    Ok(())
}

#[tracing::instrument(skip_all, name = "shutdown")]
async fn wait_until_shutdown(
    senders: Vec<MessageSender>,
    tasks: Vec<JoinHandle<()>>,
) -> Result<(), WaitUntilShutdownError> {
    wait_for_signal().await?;
    SHUTDOWN.store(true, Ordering::Relaxed);
    tracing::info!("gracefully shutting down...");

    tracing::debug!("sending close frames to all shards...");
    for sender in senders {
        let _ = sender.close(CloseFrame::NORMAL);
    }

    tracing::debug!("waiting for all shard gateway event handlers...");
    for jh in tasks {
        let _ = jh.await;
    }

    tracing::info!("shut down gracefully");
    Ok(())
}
