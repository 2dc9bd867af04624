// ABOUTME: Notification sink interface for pushing menus and weekly-plan requests
// ABOUTME: Ships a tracing-backed sink; real delivery channels plug in behind the trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use async_trait::async_trait;
use little_chef_core::constants::service_names;
use little_chef_core::errors::AppResult;
use little_chef_core::models::DailyMenu;
use tracing::info;

/// Delivers menu notifications to the caregiver
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Push the current menu
    async fn send_menu(
        &self,
        nickname: &str,
        menu: &DailyMenu,
        token: Option<&str>,
    ) -> AppResult<()>;

    /// Ask for a weekly plan to be prepared
    async fn request_weekly_plan(&self, nickname: &str, token: Option<&str>) -> AppResult<()>;
}

/// Sink that records notifications in the log instead of delivering them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn send_menu(
        &self,
        nickname: &str,
        menu: &DailyMenu,
        token: Option<&str>,
    ) -> AppResult<()> {
        info!(
            service = service_names::NOTIFICATIONS,
            %nickname,
            dishes = menu.dishes().count(),
            has_token = token.is_some(),
            "menu notification triggered"
        );
        Ok(())
    }

    async fn request_weekly_plan(&self, nickname: &str, token: Option<&str>) -> AppResult<()> {
        info!(
            service = service_names::NOTIFICATIONS,
            %nickname,
            has_token = token.is_some(),
            "weekly plan requested"
        );
        Ok(())
    }
}
