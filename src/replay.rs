//! Non-interactive replay of a move sequence.

use anyhow::{Context, Result};
use retrace_game::{GameView, MoveOrder, Timeline};
use tracing::{debug, info, instrument};

use crate::cli::OutputFormat;

/// Replays board indices on a fresh game, then optionally jumps to a step.
///
/// Illegal moves are ignored the same way clicks on the board are.
#[instrument]
pub fn replay(moves: &[u8], jump: Option<usize>, order: MoveOrder) -> Result<Timeline> {
    let mut timeline = Timeline::with_order(order);
    for &index in moves {
        let before = timeline.history_len();
        timeline = timeline
            .apply_index(usize::from(index))
            .context("Failed to replay move")?;
        if timeline.history_len() == before {
            debug!(index, "Replayed move had no effect");
        }
    }

    if let Some(step) = jump {
        timeline = timeline
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(
        step = timeline.step(),
        snapshots = timeline.history_len(),
        "Replay finished"
    );
    Ok(timeline)
}

/// Renders a view in the requested format.
#[instrument(skip(view))]
pub fn render(view: &GameView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize game view")
        }
    }
}

/// Board, status line and move list as plain text.
///
/// The active history entry is marked with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(view.status());
    out.push_str("\n\nMoves:\n");
    for entry in view.moves() {
        let marker = if view.is_current(entry) { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step(), entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_ignores_illegal_moves() {
        let timeline = replay(&[4, 4, 0], None, MoveOrder::Ascending).expect("replay");
        assert_eq!(timeline.history_len(), 3);
    }

    #[test]
    fn test_replay_bad_jump() {
        assert!(replay(&[4], Some(5), MoveOrder::Ascending).is_err());
    }

    #[test]
    fn test_render_text() {
        let timeline = replay(&[0, 4], Some(1), MoveOrder::Descending).expect("replay");
        let text = render_text(&GameView::from_timeline(&timeline));
        let expected = "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\n\
                        Current player: O\n\n\
                        Moves:\n  2. O @ (2, 2)\n> 1. X @ (1, 1)\n  0. Go to game start\n";
        assert_eq!(text, expected);
    }
}
