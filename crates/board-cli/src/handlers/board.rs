use crate::cli::{NewArgs, PatchArgs};
use crate::context::{CliContext, STDIN};
use crate::output;
use anyhow::{anyhow, bail};
use board_model::{board_from_json, board_patch_from_json, Board};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn handle_new(ctx: &CliContext, args: NewArgs) -> anyhow::Result<()> {
    let mut board = Board::new(args.team_id, args.board_type, args.created_by);
    if let Some(title) = args.title {
        board.title = title;
    }
    if let Some(channel_id) = args.channel_id {
        board.channel_id = channel_id;
    }
    board.is_valid()?;

    tracing::info!("Created board {} in team {}", board.id, board.team_id);
    output::output_success(&board, ctx.pretty);
    Ok(())
}

pub async fn handle_validate(ctx: &CliContext, source: String) -> anyhow::Result<()> {
    let board = read_board(ctx, &source).await?;

    let report = match board.is_valid() {
        Ok(()) => ValidationReport {
            valid: true,
            error: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            error: Some(e.to_string()),
        },
    };
    output::output_success(report, ctx.pretty);
    Ok(())
}

pub async fn handle_patch(ctx: &CliContext, args: PatchArgs) -> anyhow::Result<()> {
    if args.board == STDIN && args.patch == STDIN {
        bail!("--board and --patch cannot both read from stdin");
    }

    let mut board = read_board(ctx, &args.board).await?;
    let bytes = ctx.read_input(&args.patch).await?;
    let patch = board_patch_from_json(bytes.as_slice())
        .ok_or_else(|| anyhow!("Could not decode patch from {}", args.patch))?;

    if ctx.validate_before_apply(args.no_validate) {
        patch
            .is_valid()
            .map_err(|e| anyhow!("Invalid patch: {}", e))?;
    }

    if patch.is_empty() {
        tracing::info!("Patch for board {} changes nothing", board.id);
    }
    patch.apply(&mut board);

    if let Some(user) = args
        .modified_by
        .or_else(|| ctx.config.default_modified_by.clone())
    {
        board.touch(user);
    }

    if ctx.validate_after_apply(args.no_validate) {
        board
            .is_valid()
            .map_err(|e| anyhow!("Patched board is invalid: {}", e))?;
    }

    output::output_success(&board, ctx.pretty);
    Ok(())
}

async fn read_board(ctx: &CliContext, source: &str) -> anyhow::Result<Board> {
    let bytes = ctx.read_input(source).await?;
    board_from_json(bytes.as_slice())
        .ok_or_else(|| anyhow!("Could not decode board from {}", source))
}
