// SPDX-License-Identifier: MPL-2.0
//! Process-wide helpers. The installed handle is global, so the whole
//! lifecycle runs in a single test.

use feedback_kit::config::Config;
use feedback_kit::error::Error;
use feedback_kit::feedback::{self, Feedback};
use feedback_kit::ui::dialogs::ConfirmKind;
use feedback_kit::ui::notifications::Severity;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_helpers_lifecycle() {
    // Before the startup hook runs
    assert!(feedback::installed().is_none());
    assert_eq!(
        feedback::show_alert(Severity::Info, "too early").unwrap_err(),
        Error::NotInstalled
    );
    assert_eq!(
        feedback::show_confirm("Delete?", "", None).unwrap_err(),
        Error::NotInstalled
    );

    // Startup hook
    feedback::install(Feedback::new(&Config::default())).expect("first install");
    assert_eq!(
        feedback::install(Feedback::default()).unwrap_err(),
        Error::AlreadyInstalled
    );
    let installed = feedback::installed().expect("installed handle");

    // Alert
    feedback::show_alert(Severity::Danger, "Save failed").expect("show_alert");
    let items = installed.toasts().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].severity(), Severity::Danger);
    assert_eq!(items[0].message(), "Save failed");
    assert!(items[0].is_shown());

    tokio::time::sleep(Duration::from_millis(3001)).await;
    assert!(!installed.toasts().items()[0].is_shown());
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(installed.toasts().items().is_empty());

    // Confirm
    let confirmation =
        feedback::show_confirm("Delete?", "This cannot be undone.", None).expect("show_confirm");
    let dialog = installed.confirm().snapshot();
    assert!(dialog.is_open);
    assert_eq!(dialog.kind, ConfirmKind::Danger);

    let closer = installed.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        closer.confirm().close(true);
    });
    assert_eq!(confirmation.await, Ok(true));
    assert!(!installed.confirm().is_open());

    // Closing again is harmless
    assert!(!installed.confirm().close(false));
}
