use bujo_planner::*;
use lopdf::{Dictionary, Document, Object, Stream};

fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(954),
                    Object::Integer(1696),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(num_pages as i64)),
        ])),
    );
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.pdf");

    save_pdf(create_test_pdf(6), &path).await.unwrap();
    let loaded = load_pdf(&path).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 6);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("nested").join("planner.pdf");

    save_pdf(create_test_pdf(1), &path).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_save_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.pdf");

    save_pdf(create_test_pdf(2), &path).await.unwrap();
    save_pdf(create_test_pdf(3), &path).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("planner.pdf")]);
    assert_eq!(load_pdf(&path).await.unwrap().get_pages().len(), 3);
}

#[tokio::test]
async fn test_links_survive_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linked.pdf");

    let mut doc = create_test_pdf(3);
    let links = [ResolvedLink {
        source_page: 2,
        target_page: 0,
        anchor: bujo_planner::geometry::Rect::new(10.0, 10.0, 60.0, 40.0),
    }];
    apply_links(&mut doc, &links, 1696.0).unwrap();

    save_pdf(doc, &path).await.unwrap();
    let loaded = load_pdf(&path).await.unwrap();
    assert_eq!(count_link_annotations(&loaded), 1);
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_pdf(dir.path().join("missing.pdf")).await;
    assert!(matches!(result, Err(PlannerError::Io(_))));
}

#[tokio::test]
async fn test_failed_save_removes_temporary_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.pdf");
    std::fs::create_dir(&path).unwrap();

    let result = save_pdf(create_test_pdf(2), &path).await;
    assert!(matches!(result, Err(PlannerError::Persist(_))));

    // still holding the error
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("planner.pdf")]);
    assert!(path.is_dir());
    drop(result);
}
