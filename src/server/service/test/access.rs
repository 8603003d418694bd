use chrono::Utc;

use super::*;
use crate::server::{
    model::content::Content, service::access::ContentAccess, subscription::SubscriptionReply,
};

fn content_by(creator_id: i32) -> Content {
    Content {
        id: 1,
        creator_id,
        title: "Pilot".to_string(),
        description: String::new(),
        visibility: true,
        content_file_path: None,
        thumbnail_file_path: None,
        uploaded_at: Utc::now(),
        genres: Vec::new(),
        categories: Vec::new(),
        sponsors: Vec::new(),
    }
}

/// Tests write access for every owner/admin combination.
///
/// Expected: true exactly when the caller is the creator or an admin
#[test]
fn write_requires_owner_or_admin() {
    let content = content_by(7);

    assert!(ContentAccess::can_write(&identity(7, false), &content));
    assert!(ContentAccess::can_write(&identity(8, true), &content));
    assert!(ContentAccess::can_write(&identity(7, true), &content));
    assert!(!ContentAccess::can_write(&identity(8, false), &content));
}

/// Tests that the creator reads their own content without a subscription check.
///
/// Expected: true with zero oracle calls
#[tokio::test]
async fn owner_reads_without_asking_oracle() {
    let oracle = RecordingOracle::replying(SubscriptionReply::Flag(false));
    let access = ContentAccess::new(&oracle);

    assert!(access.can_read(&identity(7, false), &content_by(7)).await);
    assert_eq!(oracle.calls(), 0);
}

/// Tests that an admin reads anyone's content without a subscription check.
///
/// Expected: true with zero oracle calls
#[tokio::test]
async fn admin_reads_without_asking_oracle() {
    let oracle = RecordingOracle::replying(SubscriptionReply::Flag(false));
    let access = ContentAccess::new(&oracle);

    assert!(access.can_read(&identity(1, true), &content_by(7)).await);
    assert_eq!(oracle.calls(), 0);
}

/// Tests that a subscribed stranger may read.
///
/// Expected: true after exactly one oracle call
#[tokio::test]
async fn subscriber_reads_after_one_oracle_call() {
    let oracle = RecordingOracle::replying(SubscriptionReply::Flag(true));
    let access = ContentAccess::new(&oracle);

    assert!(access.can_read(&identity(8, false), &content_by(7)).await);
    assert_eq!(oracle.calls(), 1);
}

/// Tests that the text reply "false" is not treated as truthy.
///
/// Expected: false
#[tokio::test]
async fn text_false_reply_denies() {
    let oracle = RecordingOracle::replying(SubscriptionReply::Text("false".to_string()));
    let access = ContentAccess::new(&oracle);

    assert!(!access.can_read(&identity(8, false), &content_by(7)).await);
    assert_eq!(oracle.calls(), 1);
}

/// Tests that the text reply "TRUE" is accepted.
///
/// Expected: true
#[tokio::test]
async fn text_true_reply_in_any_case_allows() {
    let oracle = RecordingOracle::replying(SubscriptionReply::Text(" TRUE ".to_string()));
    let access = ContentAccess::new(&oracle);

    assert!(access.can_read(&identity(8, false), &content_by(7)).await);
}

/// Tests that an unreachable subscription service denies instead of failing.
///
/// Expected: false
#[tokio::test]
async fn oracle_failure_denies() {
    let oracle = RecordingOracle::failing();
    let access = ContentAccess::new(&oracle);

    assert!(!access.can_view_creator(&identity(8, false), 7).await);
    assert_eq!(oracle.calls(), 1);
}
