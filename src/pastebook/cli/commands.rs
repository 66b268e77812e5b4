use super::print::{print_full_paste, print_messages, print_pastes};
use super::setup::AppContext;
use colored::Colorize;
use pastebook::clipboard::{copy_to_clipboard, share, ShareOutcome};
use pastebook::config::parse_paste_id;
use pastebook::editor::{edit_content, EditorContent};
use pastebook::error::{Action, PasteError, Result};
use pastebook::identity::Identity;
use pastebook::model::{PasteDraft, PasteUpdate};

pub(super) fn handle_create(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (title, content) = if no_editor || content.is_some() {
        (title.unwrap_or_default(), content.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), String::new());
        let edited = edit_content(&initial)?;
        (edited.title, edited.content)
    };
    validate(&title, &content)?;

    let result = ctx.api.add_to_pastes(PasteDraft::new(title, content))?;
    print_messages(&result.messages);
    for paste in &result.affected_pastes {
        println!("{}", paste.id);
    }
    Ok(())
}

pub(super) fn handle_edit(
    ctx: &mut AppContext,
    target: String,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let id = resolve_id(&target)?;
    let Some(existing) = ctx.api.pastes().iter().find(|p| p.id == id).cloned() else {
        println!("{}", format!("No paste with id {}; nothing updated.", id).dimmed());
        return Ok(());
    };

    if !existing.is_mutable_by(ctx.api.current_user()) {
        return Err(PasteError::NotAuthorized {
            action: Action::Edit,
            id,
        });
    }

    let (title, content) = if title.is_none() && content.is_none() {
        let edited = edit_content(&EditorContent::new(existing.title, existing.content))?;
        (edited.title, edited.content)
    } else {
        (
            title.unwrap_or(existing.title),
            content.unwrap_or(existing.content),
        )
    };
    validate(&title, &content)?;

    let result = ctx.api.update_pastes(PasteUpdate::new(id, title, content))?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let query = search.unwrap_or_default();
    let result = ctx.api.search_pastes(&query);
    print_pastes(
        &result.listed_pastes,
        ctx.api.current_user(),
        !query.is_empty(),
    );
    Ok(())
}

pub(super) fn handle_view(ctx: &mut AppContext, target: String) -> Result<()> {
    let id = resolve_id(&target)?;
    let result = ctx.api.view_paste(&id)?;
    let is_owner = ctx.api.check_ownership(&id);
    for paste in &result.listed_pastes {
        let edit_url = is_owner.then(|| ctx.config.edit_url(&paste.id));
        print_full_paste(paste, &ctx.config.share_url(&paste.id), edit_url.as_deref());
    }
    Ok(())
}

pub(super) fn handle_copy(ctx: &mut AppContext, target: String) -> Result<()> {
    let id = resolve_id(&target)?;
    let result = ctx.api.view_paste(&id)?;
    for paste in &result.listed_pastes {
        copy_to_clipboard(&paste.content)?;
    }
    println!("{}", "Copied to Clipboard".green());
    Ok(())
}

pub(super) fn handle_share(ctx: &mut AppContext, target: String) -> Result<()> {
    let id = resolve_id(&target)?;
    ctx.api.view_paste(&id)?;

    let outcome = share(&ctx.config.share_url(&id));
    match &outcome {
        ShareOutcome::Copied { .. } => println!("{}", "Link copied to clipboard!".green()),
        ShareOutcome::LinkOnly { reason, .. } => {
            eprintln!("{}", format!("Failed to copy link: {}", reason).yellow())
        }
    }
    println!("{}", outcome.url());
    Ok(())
}

pub(super) fn handle_delete(ctx: &mut AppContext, target: String) -> Result<()> {
    let id = resolve_id(&target)?;
    let result = ctx.api.remove_from_pastes(&id)?;
    if result.messages.is_empty() {
        println!("{}", format!("No paste with id {}; nothing deleted.", id).dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        return Err(PasteError::Api(
            "This deletes every paste on this machine. Re-run with --yes to confirm.".into(),
        ));
    }
    let result = ctx.api.reset_paste()?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_whoami(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.current_user());
    Ok(())
}

pub(super) fn handle_login(ctx: &mut AppContext, identity: String) -> Result<()> {
    let identity = identity.trim();
    if identity.is_empty() {
        return Err(PasteError::Api("Identity cannot be empty".into()));
    }
    let result = ctx.api.set_current_user(Identity::new(identity))?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_owns(ctx: &mut AppContext, target: String) -> Result<()> {
    let id = resolve_id(&target)?;
    if ctx.api.check_ownership(&id) {
        println!("yes");
    } else {
        println!("no");
    }
    Ok(())
}

pub(super) fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("share-base-url = {}", ctx.config.share_base_url);
            println!("log-filter = {}", ctx.config.log_filter);
        }
        (Some("share-base-url"), None) => println!("{}", ctx.config.share_base_url),
        (Some("log-filter"), None) => println!("{}", ctx.config.log_filter),
        (Some("share-base-url"), Some(v)) => {
            ctx.config.set_share_base_url(&v);
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Configuration saved".green());
        }
        (Some("log-filter"), Some(v)) => {
            ctx.config.log_filter = v;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Configuration saved".green());
        }
        (Some(other), _) => {
            return Err(PasteError::Api(format!("Unknown config key: {}", other)));
        }
    }
    Ok(())
}

fn resolve_id(target: &str) -> Result<String> {
    parse_paste_id(target)
        .ok_or_else(|| PasteError::Api(format!("Not a paste id or link: {}", target)))
}

fn validate(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PasteError::Api("Title cannot be empty".into()));
    }
    if content.trim().is_empty() {
        return Err(PasteError::Api("Content cannot be empty".into()));
    }
    Ok(())
}
