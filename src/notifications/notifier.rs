//! Hand-off of notifications to the host desktop

use std::process::Command;

use super::errors::{NotificationError, Result};
use super::models::Notification;

/// Something that can put a notification in front of the user.
///
/// Delivery is fire-and-forget: implementations report whether the hand-off
/// succeeded, not whether the user saw it.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<()>;
}

/// Desktop family whose notification facility we drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// freedesktop `notify-send` (Linux and the BSDs)
    Freedesktop,
    /// AppleScript `display notification` via `osascript`
    MacOs,
    /// WinRT toast via PowerShell
    Windows,
}

impl Platform {
    /// Platform of the running host
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOs
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Freedesktop
        }
    }
}

/// A fully built external command: executable plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl NotificationCommand {
    /// Build the command that shows `notification` on `platform`
    pub fn build(platform: Platform, app_name: &str, notification: &Notification) -> Self {
        match platform {
            Platform::Freedesktop => Self {
                program: "notify-send".to_string(),
                args: vec![
                    "-a".to_string(),
                    app_name.to_string(),
                    "-t".to_string(),
                    notification.timeout.as_millis().to_string(),
                    notification.title.clone(),
                    notification.message.clone(),
                ],
            },
            Platform::MacOs => {
                let script = format!(
                    "display notification \"{}\" with title \"{}\"",
                    applescript_escape(&notification.message),
                    applescript_escape(&notification.title),
                );
                Self {
                    program: "osascript".to_string(),
                    args: vec!["-e".to_string(), script],
                }
            }
            Platform::Windows => Self {
                program: "powershell".to_string(),
                args: vec![
                    "-NoProfile".to_string(),
                    "-NonInteractive".to_string(),
                    "-Command".to_string(),
                    windows_toast_script(app_name, notification),
                ],
            },
        }
    }
}

fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn powershell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn windows_toast_script(app_name: &str, notification: &Notification) -> String {
    [
        "[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] > $null".to_string(),
        "$template = [Windows.UI.Notifications.ToastNotificationManager]::GetTemplateContent([Windows.UI.Notifications.ToastTemplateType]::ToastText02)".to_string(),
        "$text = $template.GetElementsByTagName('text')".to_string(),
        format!(
            "$text.Item(0).AppendChild($template.CreateTextNode({})) > $null",
            powershell_quote(&notification.title)
        ),
        format!(
            "$text.Item(1).AppendChild($template.CreateTextNode({})) > $null",
            powershell_quote(&notification.message)
        ),
        "$toast = [Windows.UI.Notifications.ToastNotification]::new($template)".to_string(),
        format!(
            "$toast.ExpirationTime = [DateTimeOffset]::Now.AddSeconds({})",
            notification.timeout.as_secs()
        ),
        format!(
            "[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier({}).Show($toast)",
            powershell_quote(app_name)
        ),
    ]
    .join("; ")
}

/// Notifier backed by the host's notification command
pub struct DesktopNotifier {
    platform: Platform,
    program: Option<String>,
    app_name: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
            program: None,
            app_name: "motivation".to_string(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Use a different executable with the platform's argument convention
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// The command `notify` would run for `notification`
    pub fn command_for(&self, notification: &Notification) -> NotificationCommand {
        let mut command = NotificationCommand::build(self.platform, &self.app_name, notification);
        if let Some(program) = &self.program {
            command.program = program.clone();
        }
        command
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let command = self.command_for(notification);

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|e| NotificationError::Delivery(format!("{}: {}", command.program, e)))?;

        if !status.success() {
            return Err(NotificationError::Delivery(format!(
                "{} exited with {}",
                command.program, status
            )));
        }

        log::debug!("Delivered notification '{}' via {}", notification.title, command.program);
        Ok(())
    }
}
