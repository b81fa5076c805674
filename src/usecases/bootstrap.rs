use std::{path::Path, sync::mpsc};

use anyhow::Result;

use crate::{
    domain::{
        chat_list_state::ChatListState, chat_registry::ChatRegistry, sample_data,
        shell_state::ShellState,
    },
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::{DefaultShellOrchestrator, ShellSettings},
        splash::TokioSplashScheduler,
    },
};

pub struct ComposedShell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext> {
    let mut context = build_context(&FileConfigAdapter::new(config_path))?;
    let guard = infra::logging::init(&context.config.logging, &context.layout)?;
    context.hold_log_guard(guard);

    tracing::info!(
        log_level = %context.config.logging.level,
        log_dir = %context.layout.log_dir.display(),
        "swiftchat bootstrapped"
    );
    Ok(context)
}

/// Chat list populated from the built-in sample threads.
pub fn seeded_chat_list() -> Result<ChatListState> {
    let registry = ChatRegistry::from_seed(sample_data::seed_threads())?;
    Ok(ChatListState::new(registry))
}

pub fn compose_shell(context: &AppContext) -> Result<ComposedShell> {
    let (sender, receiver) = mpsc::channel();
    let scheduler = TokioSplashScheduler::new(sender)?;
    let settings = ShellSettings {
        splash_delay: context.config.splash.delay(),
        notice_duration: context.config.ui.notice_duration(),
    };

    let state = ShellState::new(seeded_chat_list()?);
    Ok(ComposedShell {
        event_source: Box::new(CrosstermEventSource::new(receiver, context.config.ui.tick())),
        orchestrator: Box::new(DefaultShellOrchestrator::new(state, scheduler, settings)),
    })
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext> {
    let config = config_adapter.load()?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}
