use std::io::{self, Write};

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::chat_registry::ChatRegistry,
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Chats { width } => {
            let chat_list = bootstrap::seeded_chat_list()?;
            let stdout = io::stdout();
            write_chat_rows(&mut stdout.lock(), chat_list.registry(), width)?;
        }
    }

    Ok(())
}

fn write_chat_rows(out: &mut dyn Write, registry: &ChatRegistry, width: usize) -> Result<()> {
    for thread in registry.list() {
        writeln!(out, "{}", ui::chat_row_text(registry, thread, width).trim_end())?;
    }
    Ok(())
}
