//! Command handlers.
//!
//! Each handler wires an `HttpGateway` into the matching page controller,
//! runs it to completion and returns the route the user ends up on.

use anyhow::Result;
use clubadmin_client::ClubAdminClient;
use clubadmin_core::{Club, EntityId, League, Team};
use clubadmin_editor::{
    ClubEditPage, ClubFields, ClubNewPage, HistoryNavigator, LeagueEditPage, TracingNotifier,
    routes,
};
use std::sync::Arc;

use crate::ClubFieldArgs;

impl ClubFieldArgs {
    /// Writes every given value into `fields`.
    fn apply(&self, fields: &mut ClubFields) {
        if let Some(name) = &self.name {
            fields.name = name.clone();
        }
        if let Some(address) = &self.address {
            fields.address = address.clone();
        }
        if let Some(phone) = &self.phone {
            fields.phone = phone.clone();
        }
        if let Some(date) = &self.registration_date {
            fields.registration_date = date.clone();
        }
        if let Some(image) = &self.image {
            fields.image = Some(image.clone()).filter(|image| !image.is_empty());
        }
    }
}

fn current_route(navigator: &HistoryNavigator) -> String {
    navigator.current().unwrap_or_default()
}

/// `club new`
pub async fn club_new(client: &ClubAdminClient, args: &ClubFieldArgs) -> Result<String> {
    let navigator = Arc::new(HistoryNavigator::new([routes::CLUB_LIST, routes::CLUB_NEW]));
    let page = ClubNewPage::new(
        Arc::new(client.gateway::<Club>()),
        Arc::new(TracingNotifier),
        navigator.clone(),
    );

    let form = page.form();
    form.edit(|fields| args.apply(fields));
    let exit = form.submit().await?;
    page.handle_exit(exit);

    Ok(current_route(&navigator))
}

/// `club edit <ID>`
pub async fn club_edit(
    client: &ClubAdminClient,
    id: &str,
    args: &ClubFieldArgs,
) -> Result<String> {
    let navigator = Arc::new(HistoryNavigator::new([
        routes::CLUB_LIST.to_string(),
        routes::club_edit(id),
    ]));
    let page = ClubEditPage::new(
        Arc::new(client.gateway::<Club>()),
        Arc::new(TracingNotifier),
        navigator.clone(),
    );

    page.activate(Some(id)).await?;
    let form = page.form()?;
    form.edit(|fields| args.apply(fields));
    let exit = form.submit().await?;
    page.handle_exit(exit);

    Ok(current_route(&navigator))
}

/// `league edit <ID>`
pub async fn league_edit(
    client: &ClubAdminClient,
    id: &str,
    name: Option<String>,
    team: Option<i64>,
) -> Result<String> {
    let navigator = Arc::new(HistoryNavigator::new([
        routes::LEAGUE_LIST.to_string(),
        routes::league_edit(id),
    ]));
    let page = LeagueEditPage::new(
        Arc::new(client.gateway::<League>()),
        Arc::new(client.gateway::<Team>()),
        Arc::new(TracingNotifier),
        navigator.clone(),
    );

    page.activate(Some(id)).await?;
    if let Some(name) = name {
        page.set_name(name);
    }
    if let Some(team) = team {
        page.select_team(Some(EntityId::new(team)));
    }
    page.do_save().await?;

    Ok(current_route(&navigator))
}
