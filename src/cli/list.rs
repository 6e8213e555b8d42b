use clap::Args;
use cookbook_recipe::{Action, FilterPatch, Recipe, SortBy};
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON fixture with recipe drafts
    #[arg(long)]
    pub file: PathBuf,

    /// Free-text search over titles, descriptions, ingredients, instructions and tags
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub max_prep_time: Option<u32>,

    #[arg(long)]
    pub max_cooking_time: Option<u32>,

    #[arg(long)]
    pub min_servings: Option<u32>,

    #[arg(long)]
    pub max_servings: Option<u32>,

    /// title, prepTime, cookingTime, servings or newest
    #[arg(long, default_value_t = SortBy::Title)]
    pub sort: SortBy,
}

#[tracing::instrument(skip(config, out), fields(file = %args.file.display()))]
pub fn run(config: crate::Config, args: ListArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = crate::import::load_store(&args.file, &config)?;

    if let Some(term) = args.search {
        store.dispatch(Action::SetSearchTerm(term));
    }

    store.dispatch(Action::SetFilters(FilterPatch {
        max_prep_time: Some(args.max_prep_time),
        max_cooking_time: Some(args.max_cooking_time),
        min_servings: Some(args.min_servings),
        max_servings: Some(args.max_servings),
    }));
    store.dispatch(Action::SetSortBy(args.sort));

    writeln!(out, "{}", store.summary())?;

    let badges: Vec<String> = store
        .query()
        .active_filters()
        .iter()
        .map(ToString::to_string)
        .collect();
    if !badges.is_empty() {
        writeln!(out, "Filters: {}", badges.join(", "))?;
    }

    for recipe in store.filtered_recipes() {
        writeln!(out, "{}", line(recipe))?;
    }

    Ok(())
}

fn line(recipe: &Recipe) -> String {
    let mut details = Vec::new();
    if let Some(minutes) = recipe.prep_time {
        details.push(format!("prep {minutes}min"));
    }
    if let Some(minutes) = recipe.cooking_time {
        details.push(format!("cook {minutes}min"));
    }
    if let Some(servings) = recipe.servings {
        details.push(format!("serves {servings}"));
    }
    if let Some(difficulty) = recipe.difficulty {
        details.push(difficulty.to_string());
    }

    let mut line = format!("{:>3}. {}", recipe.id, recipe.title);
    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }
    if !recipe.tags.is_empty() {
        let tags: Vec<String> = recipe.tags.iter().map(|tag| format!("#{tag}")).collect();
        line.push(' ');
        line.push_str(&tags.join(" "));
    }

    line
}
