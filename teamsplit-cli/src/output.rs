/// Output formatting: terminal report and JSON.
use serde::Serialize;
use teamsplit_core::{GroupingResult, PresentedMember, PresentedTeam, RankedSplit};

#[derive(Serialize)]
struct JsonOutput<'a> {
    candidates_considered: usize,
    optimal_gap: u64,
    optimal_count: usize,
    /// Rank of the randomly featured split, when --pick-one was given.
    featured: Option<usize>,
    splits: Vec<JsonSplit<'a>>,
}

#[derive(Serialize)]
struct JsonSplit<'a> {
    rank: usize,
    score_difference: u64,
    primary: &'a PresentedTeam,
    secondary: &'a PresentedTeam,
    summary: String,
}

/// Render one split as a side-by-side table of both teams.
fn format_split_table(split: &RankedSplit) -> String {
    let p = &split.presentation;
    let cell = |m: &PresentedMember| {
        format!("{} ({}, {}LP)", m.display_name, m.rank_label, m.league_points)
    };
    let header = |t: &PresentedTeam| format!("{} ({})", t.label, t.total);

    let left: Vec<String> = p.primary.members.iter().map(cell).collect();
    let right: Vec<String> = p.secondary.members.iter().map(cell).collect();
    let left_header = header(&p.primary);
    let right_header = header(&p.secondary);

    let column_width = |head: &str, cells: &[String]| {
        cells
            .iter()
            .map(|c| c.chars().count())
            .chain(std::iter::once(head.chars().count()))
            .max()
            .unwrap_or(0)
    };
    let left_width = column_width(&left_header, &left);
    let right_width = column_width(&right_header, &right);

    let mut out = String::new();
    out.push_str(&format!(
        "#{} | gap {}\n",
        split.rank, split.candidate.score_difference
    ));
    out.push_str(&format!("  {left_header:<left_width$} | {right_header}\n"));
    out.push_str(&format!(
        "  {}-+-{}\n",
        "-".repeat(left_width),
        "-".repeat(right_width)
    ));
    for (l, r) in left.iter().zip(&right) {
        out.push_str(&format!("  {l:<left_width$} | {r}\n"));
    }
    out
}

/// Print results as a terminal report, best split first.
pub fn print_report(result: &GroupingResult, featured: Option<&RankedSplit>) {
    for split in &result.splits {
        println!("{}", format_split_table(split));
    }

    println!(
        "{} of {} splits shown (best possible gap: {}, achieved by {} split{})",
        result.splits.len(),
        result.candidates_considered,
        result.optimal_gap,
        result.optimal_count,
        if result.optimal_count == 1 { "" } else { "s" },
    );

    if let Some(split) = featured {
        println!("\nFeatured split (#{}):\n", split.rank);
        print!("{}", split.presentation.summary());
    }
}

fn build_json(result: &GroupingResult, featured: Option<&RankedSplit>) -> serde_json::Value {
    let output = JsonOutput {
        candidates_considered: result.candidates_considered,
        optimal_gap: result.optimal_gap,
        optimal_count: result.optimal_count,
        featured: featured.map(|s| s.rank),
        splits: result
            .splits
            .iter()
            .map(|s| JsonSplit {
                rank: s.rank,
                score_difference: s.candidate.score_difference,
                primary: &s.presentation.primary,
                secondary: &s.presentation.secondary,
                summary: s.presentation.summary(),
            })
            .collect(),
    };
    serde_json::to_value(&output).unwrap_or_default()
}

/// Print results as JSON.
pub fn print_json(result: &GroupingResult, featured: Option<&RankedSplit>) {
    let value = build_json(result, featured);
    println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
}
