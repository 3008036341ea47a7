//! Full HTML page generator.
//!
//! Produces the crowdfunding page: summary widgets, the description blurb,
//! the two highlight panels and the card container for the board's current
//! view. The same markup backs `fundboard export` and the web server's `/`.

use anyhow::Result;
use std::fmt::Write as _;

use crate::app::{Board, View};
use crate::assets;
use crate::constants::APP_NAME;
use crate::render::{escape_html, render, HtmlCards};
use crate::services::{format_dollars, format_thousands, Filter};

/// How the page pulls in its stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// Embed the CSS in a `<style>` block (standalone file)
    Inline,
    /// Link to a stylesheet URL
    Linked(String),
}

/// Page generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Stylesheet handling
    pub stylesheet: Stylesheet,
    /// Include the filter links and search form (only useful when served)
    pub interactive: bool,
}

impl PageOptions {
    /// A self-contained static file.
    pub fn standalone() -> Self {
        Self {
            stylesheet: Stylesheet::Inline,
            interactive: false,
        }
    }

    /// A page served by the web server.
    pub fn served(stylesheet_url: impl Into<String>) -> Self {
        Self {
            stylesheet: Stylesheet::Linked(stylesheet_url.into()),
            interactive: true,
        }
    }
}

/// Generates the page for the board's current view.
///
/// # Example
///
/// ```no_run
/// use fundboard::app::Board;
/// use fundboard::export::{generate_page, PageOptions};
/// use fundboard::services::CatalogService;
///
/// let board = Board::new(CatalogService::load_bundled()?);
/// let html = generate_page(&board, &PageOptions::standalone())?;
/// println!("{}", html);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_page(board: &Board, options: &PageOptions) -> Result<String> {
    generate_page_for(board, board.view(), options)
}

/// Generates the page for `view` over the board's collection, leaving the
/// board's own view alone.
pub fn generate_page_for(board: &Board, view: &View, options: &PageOptions) -> Result<String> {
    let summary = board.summary();
    let highlights = board.highlights();

    let mut cards = HtmlCards::new();
    render(board.visible_in(view), &mut cards);

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\" />\n");
    let _ = writeln!(output, "<title>{}</title>", escape_html(APP_NAME));
    match &options.stylesheet {
        Stylesheet::Inline => {
            let css = assets::text(assets::STYLESHEET)?;
            let _ = writeln!(output, "<style>\n{css}</style>");
        }
        Stylesheet::Linked(url) => {
            let _ = writeln!(
                output,
                "<link rel=\"stylesheet\" href=\"{}\" />",
                escape_html(url)
            );
        }
    }
    output.push_str("</head>\n<body>\n");
    let _ = writeln!(output, "<h1>{}</h1>", escape_html(APP_NAME));

    // Summary widgets
    output.push_str("<div class=\"stats-container\">\n");
    write_stat(
        &mut output,
        "num-contributions",
        "Individual Contributions",
        &format_thousands(summary.total_backers),
    );
    write_stat(
        &mut output,
        "total-raised",
        "Total Raised",
        &format_dollars(summary.total_pledged),
    );
    write_stat(
        &mut output,
        "num-games",
        "Total Games",
        &format_thousands(summary.count as u64),
    );
    output.push_str("</div>\n");

    let _ = writeln!(
        output,
        "<div id=\"description-container\"><p>{}</p></div>",
        escape_html(&summary.blurb())
    );

    // Highlights
    output.push_str("<div class=\"top-games-container\">\n");
    write_highlight(
        &mut output,
        "first-game",
        "Top Funded Game",
        highlights.first.map(|c| c.name.as_str()),
    );
    write_highlight(
        &mut output,
        "second-game",
        "Runner Up",
        highlights.second.map(|c| c.name.as_str()),
    );
    output.push_str("</div>\n");

    output.push_str("<h2>Our Games</h2>\n");
    if options.interactive {
        write_controls(&mut output, view);
    } else {
        let _ = writeln!(output, "<p class=\"view\">{}</p>", escape_html(&view.to_string()));
    }

    output.push_str("<div id=\"games-container\">\n");
    output.push_str(&cards.to_html());
    output.push_str("</div>\n</body>\n</html>\n");

    Ok(output)
}

fn write_stat(output: &mut String, id: &str, label: &str, value: &str) {
    let _ = writeln!(
        output,
        "<div class=\"stats-card\"><h3>{}</h3><div id=\"{}\"><p>{}</p></div></div>",
        escape_html(label),
        id,
        escape_html(value)
    );
}

/// Shown in a highlight panel when there are fewer than two campaigns.
const EMPTY_HIGHLIGHT: &str = "Not enough games yet";

fn write_highlight(output: &mut String, id: &str, label: &str, name: Option<&str>) {
    let _ = writeln!(
        output,
        "<div class=\"top-game\" id=\"{}\"><h3>{}</h3><p>{}</p></div>",
        id,
        escape_html(label),
        escape_html(name.unwrap_or(EMPTY_HIGHLIGHT))
    );
}

fn write_controls(output: &mut String, view: &View) {
    let active = view.filter();
    output.push_str("<div class=\"filter-bar\">\n");
    for (filter, id) in [
        (Filter::Unfunded, "unfunded-btn"),
        (Filter::Funded, "funded-btn"),
        (Filter::All, "all-btn"),
    ] {
        let class = if active == Some(filter) { " class=\"active\"" } else { "" };
        let _ = writeln!(
            output,
            "<a id=\"{}\" href=\"?filter={}\"{}>{}</a>",
            id,
            filter_param(filter),
            class,
            filter.label()
        );
    }
    output.push_str("</div>\n");

    let query = match view {
        View::SearchResults(query) => query.as_str(),
        _ => "",
    };
    let _ = writeln!(
        output,
        "<form class=\"search-bar\" method=\"get\"><input id=\"search-input\" name=\"search\" value=\"{}\" placeholder=\"Search games\" /><button id=\"search-btn\" type=\"submit\">Search</button></form>",
        escape_html(query)
    );
}

const fn filter_param(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "all",
        Filter::Funded => "funded",
        Filter::Unfunded => "unfunded",
    }
}
