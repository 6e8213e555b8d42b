use clap::Args;
use cookbook_recipe::{Action, RecipeId};
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// JSON fixture with recipe drafts
    #[arg(long)]
    pub file: PathBuf,

    /// Favorite recipe id, repeatable
    #[arg(long = "favorite", required = true, num_args = 1..)]
    pub favorites: Vec<u64>,

    /// Viewed recipe id, repeatable, oldest first
    #[arg(long = "viewed", num_args = 1..)]
    pub viewed: Vec<u64>,

    /// Seed for the tie-break jitter (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[tracing::instrument(skip(config, out), fields(file = %args.file.display()))]
pub fn run(
    mut config: crate::Config,
    args: RecommendArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if args.seed.is_some() {
        config.recommendation.seed = args.seed;
    }

    let mut store = crate::import::load_store(&args.file, &config)?;

    for id in args.favorites {
        store.dispatch(Action::AddFavorite(RecipeId(id)));
    }

    for id in args.viewed {
        store.dispatch(Action::AddViewedRecipe(RecipeId(id)));
    }

    let favorites = store.favorites().len();
    let plural = if favorites == 1 { "" } else { "s" };
    writeln!(out, "Based on your {favorites} favorite recipe{plural}")?;

    let recommendations = store.recommendations();
    if recommendations.is_empty() {
        writeln!(out, "No recommendations")?;
    }

    for recommendation in recommendations {
        writeln!(
            out,
            "{:>3}. {} [{:.1}] {}",
            recommendation.recipe.id,
            recommendation.recipe.title,
            recommendation.score,
            recommendation.reason
        )?;
    }

    Ok(())
}
