use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::run(&args, ctx, flags).await,
        Commands::Show { id } => commands::show::run(&id, ctx, flags).await,
        Commands::Add(record) => commands::add::run(&record, ctx, flags).await,
        Commands::Edit { id, record } => commands::edit::run(&id, &record, ctx, flags).await,
        Commands::Delete { id } => commands::delete::run(&id, ctx, flags).await,
        Commands::Browse => commands::browse::run(ctx, flags).await,
    }
}
