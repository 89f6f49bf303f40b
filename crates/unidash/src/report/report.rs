//! HTML report assembly.
//!
//! A [`Report`] is a title block, an optional introduction, an ordered list
//! of [`ReportSection`]s and a footer. Sections hold free-form maud markup
//! and Plotly figures in insertion order. Figures are embedded inline and
//! rendered client-side by Plotly.js loaded from `plotly_cdn`.
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::config::DEFAULT_PLOTLY_CDN;

const REPORT_STYLE: &str = "
body { font-family: 'Source Sans Pro', Helvetica, Arial, sans-serif; margin: 0; color: #262730; background: #ffffff; }
.report-header { padding: 24px 48px 8px 48px; border-bottom: 1px solid #e6e6e6; }
.report-header img { height: 48px; margin-right: 16px; vertical-align: middle; }
.report-header .meta { color: #808495; font-size: 0.85em; }
main { max-width: 1400px; padding: 0 48px; }
section { margin: 32px 0; }
section h2 { border-bottom: 1px solid #f0f2f6; padding-bottom: 6px; }
.plot { margin: 12px 0; }
.report-footer { padding: 16px 48px 32px 48px; color: #808495; }
";

enum Block {
    Content(Markup),
    Plot(Box<Plot>),
}

/// A titled group of content blocks and plots.
pub struct ReportSection {
    title: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(Box::new(plot)));
    }

    pub fn plot_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Plot(_)))
            .count()
    }

    fn render(&self, section_idx: usize) -> Markup {
        let mut plot_idx = 0;
        let mut rendered = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let markup = match block {
                Block::Content(markup) => html! { div class="content" { (markup) } },
                Block::Plot(plot) => {
                    plot_idx += 1;
                    let div_id = format!("plot-{}-{}", section_idx, plot_idx);
                    html! { div class="plot" { (PreEscaped(plot.to_inline_html(Some(&div_id)))) } }
                }
            };
            rendered.push(markup);
        }

        html! {
            section id=(format!("section-{}", section_idx)) {
                h2 { (self.title) }
                @for markup in &rendered {
                    (markup)
                }
            }
        }
    }
}

/// A standalone HTML page made of sections.
pub struct Report {
    software_name: String,
    version: String,
    logo_url: Option<String>,
    title: String,
    heading: String,
    plotly_cdn: String,
    intro: Option<Markup>,
    sections: Vec<ReportSection>,
    footer: Option<Markup>,
}

impl Report {
    pub fn new(software_name: &str, version: &str, logo_url: Option<&str>, title: &str) -> Self {
        Self {
            software_name: software_name.to_string(),
            version: version.to_string(),
            logo_url: logo_url.map(str::to_string),
            title: title.to_string(),
            heading: title.to_string(),
            plotly_cdn: DEFAULT_PLOTLY_CDN.to_string(),
            intro: None,
            sections: Vec::new(),
            footer: None,
        }
    }

    /// Heading shown on the page when it differs from the `<title>`.
    pub fn set_heading(&mut self, heading: &str) {
        self.heading = heading.to_string();
    }

    pub fn set_plotly_cdn(&mut self, url: &str) {
        self.plotly_cdn = url.to_string();
    }

    pub fn set_intro(&mut self, intro: Markup) {
        self.intro = Some(intro);
    }

    pub fn set_footer(&mut self, footer: Markup) {
        self.footer = Some(footer);
    }

    pub fn add_section(&mut self, section: ReportSection) {
        log::trace!("Adding report section '{}'", section.title());
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Render the full page.
    pub fn render(&self) -> Markup {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(self.plotly_cdn) {}
                    style { (PreEscaped(REPORT_STYLE)) }
                }
                body {
                    header class="report-header" {
                        @if let Some(logo) = &self.logo_url {
                            img src=(logo) alt=(self.software_name);
                        }
                        h1 { (self.heading) }
                        p class="meta" {
                            (self.software_name) " v" (self.version) " | generated " (generated)
                        }
                    }
                    main {
                        @if let Some(intro) = &self.intro {
                            div class="intro" { (intro) }
                        }
                        @for (idx, section) in self.sections.iter().enumerate() {
                            (section.render(idx + 1))
                        }
                    }
                    @if let Some(footer) = &self.footer {
                        footer class="report-footer" { (footer) }
                    }
                }
            }
        }
    }

    /// Render the page and write it to `path`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let html = self.render().into_string();
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
        log::info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}
