mod common;

#[test]
fn test_db_fixture_cleans_up_its_files() {
    let base = "test_db_fixture_cleanup.db";

    {
        let test_db = common::TestDb::new(base);
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
    }

    // The WAL journal produces sidecar files; all of them must be gone.
    assert!(!std::path::Path::new(base).exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}
