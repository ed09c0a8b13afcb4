//! CLI for the linkpick link chooser. Every command prints one JSON response.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkpick_core::choose::ChooseIntent;
use linkpick_core::config;
use linkpick_core::links::{AnchorLinkSubmission, EmailLinkSubmission, PhoneLinkSubmission};
use linkpick_core::{ConversionPolicy, ExternalLinkSubmission, PriorSelection};
use std::path::PathBuf;

use commands::{
    load_site, run_anchor, run_best_root, run_browse, run_can_choose, run_email, run_external,
    run_phone, run_search,
};

/// Top-level CLI for the linkpick link chooser.
#[derive(Debug, Parser)]
#[command(name = "linkpick")]
#[command(about = "linkpick: resolve and build links the way a CMS page chooser does", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/linkpick/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Site map TOML describing the page tree (overrides `site_map` in the config).
    #[arg(long, global = true, value_name = "PATH")]
    pub site: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// The link being edited when the chooser was opened.
#[derive(Debug, Clone, Default, Args)]
pub struct PriorArgs {
    /// URL of the link being edited.
    #[arg(long, value_name = "URL")]
    pub prev_url: Option<String>,
    /// Text of the link being edited.
    #[arg(long, value_name = "TEXT")]
    pub prev_text: Option<String>,
}

impl PriorArgs {
    pub fn selection(&self) -> PriorSelection {
        PriorSelection::new(self.prev_url.as_deref(), self.prev_text.as_deref())
    }
}

/// Options shared by the page browsing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ChooserArgs {
    /// Comma-separated page kinds that may be chosen (e.g. tests.eventpage).
    #[arg(long, value_name = "TYPES")]
    pub page_type: Option<String>,
    /// Allow the tree root itself to be chosen.
    #[arg(long)]
    pub can_choose_root: bool,
    /// Check permissions as this actor from the site map (default: a superuser).
    #[arg(long, value_name = "NAME")]
    pub actor: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a pasted URL: keep it, convert it to a page link, or ask first.
    External {
        /// Absolute http(s) URL or root-relative path.
        url: String,
        /// Link text typed by the editor.
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        prior: PriorArgs,
        /// Conversion policy: disabled, exact, confirm or default.
        #[arg(long)]
        policy: Option<ConversionPolicy>,
        /// Serving prefix of the site (e.g. "site" or "en/site").
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,
    },

    /// Build a link to an anchor on the current page.
    Anchor {
        /// Anchor name without the leading '#'.
        anchor: String,
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        prior: PriorArgs,
    },

    /// Build a mailto: link.
    Email {
        /// Email address.
        address: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        prior: PriorArgs,
    },

    /// Build a tel: link.
    Phone {
        /// Phone number as typed.
        number: String,
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        prior: PriorArgs,
    },

    /// Show the page the chooser opens at.
    Root {
        /// Comma-separated page kinds that may be chosen.
        #[arg(long, value_name = "TYPES")]
        page_type: Option<String>,
    },

    /// List the children of a page (default: the page the chooser opens at).
    Browse {
        /// Parent page id.
        parent: Option<u64>,
        /// Page of the listing, starting at 1.
        #[arg(short = 'p', long = "page", value_name = "N")]
        page: Option<String>,
        #[command(flatten)]
        chooser: ChooserArgs,
    },

    /// Search page titles.
    Search {
        /// Words that must all appear in the title.
        query: String,
        /// Page of the results, starting at 1.
        #[arg(short = 'p', long = "page", value_name = "N")]
        page: Option<String>,
        #[command(flatten)]
        chooser: ChooserArgs,
    },

    /// Check whether a page may be chosen.
    CanChoose {
        /// Candidate page id.
        id: u64,
        /// What the page is chosen for: select, copy_to, move_to or bulk_move_to.
        #[arg(long, default_value = "select")]
        intent: ChooseIntent,
        /// Page being moved or copied (repeatable).
        #[arg(long = "target", value_name = "ID")]
        targets: Vec<u64>,
        #[command(flatten)]
        chooser: ChooserArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let site_path = cli.site.or_else(|| cfg.site_map.clone());

        match cli.command {
            CliCommand::External {
                url,
                text,
                prior,
                policy,
                prefix,
            } => {
                let site = load_site(site_path.as_deref())?;
                let submission = ExternalLinkSubmission::new(url, text.as_deref());
                run_external(
                    &cfg,
                    site,
                    &submission,
                    &prior.selection(),
                    policy,
                    prefix.as_deref(),
                )?;
            }
            CliCommand::Anchor {
                anchor,
                text,
                prior,
            } => {
                let submission = AnchorLinkSubmission {
                    anchor,
                    link_text: text,
                };
                run_anchor(&submission, &prior.selection())?;
            }
            CliCommand::Email {
                address,
                subject,
                body,
                text,
                prior,
            } => {
                let submission = EmailLinkSubmission {
                    email_address: address,
                    subject,
                    body,
                    link_text: text,
                };
                run_email(&submission, &prior.selection())?;
            }
            CliCommand::Phone {
                number,
                text,
                prior,
            } => {
                let submission = PhoneLinkSubmission {
                    phone_number: number,
                    link_text: text,
                };
                run_phone(&submission, &prior.selection())?;
            }
            CliCommand::Root { page_type } => {
                let site = load_site(site_path.as_deref())?;
                run_best_root(&site, page_type.as_deref())?;
            }
            CliCommand::Browse {
                parent,
                page,
                chooser,
            } => {
                let site = load_site(site_path.as_deref())?;
                run_browse(&cfg, &site, parent, page.as_deref(), &chooser)?;
            }
            CliCommand::Search {
                query,
                page,
                chooser,
            } => {
                let site = load_site(site_path.as_deref())?;
                run_search(&cfg, &site, &query, page.as_deref(), &chooser)?;
            }
            CliCommand::CanChoose {
                id,
                intent,
                targets,
                chooser,
            } => {
                let site = load_site(site_path.as_deref())?;
                run_can_choose(&site, id, intent, &targets, &chooser)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
