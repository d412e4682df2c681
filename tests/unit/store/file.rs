use super::*;
use crate::model::frame::Frame;
use crate::model::token::Token;
use crate::store::tactic::TacticKind;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pitchboard_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn drill(name: &str) -> NewTactic {
    NewTactic::new(
        name,
        TacticKind::Drill,
        None,
        vec![Frame::new(0, vec![Token::ball("ball", 300.0, 200.0)])],
    )
}

#[test]
fn failed_write_leaves_store_unchanged() {
    let tmp = temp_dir("file_store_failed_write");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("tactics.json");

    let mut store = JsonFileTacticStore::open(&path).unwrap();
    let kept = store.create(drill("kept")).unwrap();

    // A directory where the temp file goes makes every save fail.
    let blocker = path.with_extension("json.tmp");
    std::fs::create_dir_all(&blocker).unwrap();

    assert!(store.create(drill("lost")).is_err());
    assert_eq!(store.list(None).unwrap().len(), 1);
    assert!(store.delete(&kept).is_err());
    assert!(store.get(&kept).is_ok());

    std::fs::remove_dir_all(&blocker).unwrap();
    store.create(drill("later")).unwrap();

    let reopened = JsonFileTacticStore::open(&path).unwrap();
    let names: Vec<String> = reopened
        .list(None)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["later".to_owned(), "kept".to_owned()]);

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn missing_file_opens_empty() {
    let tmp = temp_dir("file_store_missing");
    let store = JsonFileTacticStore::open(tmp.join("none.json")).unwrap();
    assert!(store.list(None).unwrap().is_empty());
    assert!(!tmp.exists());
}
