//! Financial education CLI command

use clap::Args;

use crate::display::tip::format_tips;
use crate::error::{FinwiseError, FinwiseResult};
use crate::models::tip::filter_tips;
use crate::models::{Difficulty, TipTopic};

/// Filters for `finwise learn`
#[derive(Args, Debug, Default)]
pub struct LearnArgs {
    /// budgeting, saving, investing or debt
    #[arg(short, long)]
    pub topic: Option<String>,

    /// beginner, intermediate or advanced
    #[arg(short, long)]
    pub difficulty: Option<String>,
}

/// Print the tips matching the filters
pub fn handle_learn_command(args: LearnArgs) -> FinwiseResult<()> {
    let topic = args
        .topic
        .as_deref()
        .map(str::parse::<TipTopic>)
        .transpose()
        .map_err(FinwiseError::Validation)?;
    let difficulty = args
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(FinwiseError::Validation)?;

    let tips = filter_tips(topic, difficulty);
    print!("{}", format_tips(&tips));
    Ok(())
}
