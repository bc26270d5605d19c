/*

Copyright 2025 Lealt

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.

*/

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod bot;
mod commands;
mod constants;
mod env;
mod functions;

pub use bot::{Context, Data, Error};
use commands::memory::GameSettings;

#[tokio::main]
async fn main() -> Result<(), bot::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        rustc = env!("MEMORIA_RUSTC_VERSION"),
        profile = env!("MEMORIA_BUILD_PROFILE"),
        "starting memoria"
    );

    let token = env::discord_token()?;
    let settings = game_settings()?;
    let intents = bot::gateway_intents();
    let prefix_options = bot::prefix_options(env::command_prefix()?);

    let framework = bot::build_framework(prefix_options, settings);
    bot::run_client(token, intents, framework).await
}

fn game_settings() -> Result<GameSettings, bot::Error> {
    let defaults = GameSettings::default();
    Ok(GameSettings {
        tile_count: env::tile_count()?.unwrap_or(defaults.tile_count),
        reveal_delay: env::reveal_delay()?.unwrap_or(defaults.reveal_delay),
    })
}
