use crate::cli::DecodeKind;
use crate::context::CliContext;
use crate::output;
use board_model::{
    board_from_json, board_member_from_json, board_members_from_json, boards_from_json,
};

/// Runs the lenient adapters as-is: malformed input prints `null` or an empty
/// list rather than failing.
pub async fn handle(ctx: &CliContext, kind: DecodeKind) -> anyhow::Result<()> {
    match kind {
        DecodeKind::Board { input } => {
            let bytes = ctx.read_input(&input).await?;
            output::output_success(board_from_json(bytes.as_slice()), ctx.pretty);
        }
        DecodeKind::Boards { input } => {
            let bytes = ctx.read_input(&input).await?;
            output::output_list(boards_from_json(bytes.as_slice()), ctx.pretty);
        }
        DecodeKind::Member { input } => {
            let bytes = ctx.read_input(&input).await?;
            output::output_success(board_member_from_json(bytes.as_slice()), ctx.pretty);
        }
        DecodeKind::Members { input } => {
            let bytes = ctx.read_input(&input).await?;
            output::output_list(board_members_from_json(bytes.as_slice()), ctx.pretty);
        }
    }
    Ok(())
}
