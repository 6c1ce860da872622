use extract_core::core::parse_toml_data;
use rusqlite::Connection;
use std::fs::{create_dir_all, read_to_string, remove_file, write};

/// Minimal Photos.sqlite with the tables joined for Shared Photo Library assets
fn create_photos_database(directory: &str) {
    create_dir_all(directory).unwrap();
    let path = format!("{directory}/Photos.sqlite");
    let _ = remove_file(&path);
    write(format!("{directory}/Photos.sqlite-wal"), b"").unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE ZASSET (Z_PK INTEGER PRIMARY KEY, ZDATECREATED REAL, ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE INTEGER,
            ZDIRECTORY TEXT, ZFILENAME TEXT, ZSYNDICATIONSTATE INTEGER, ZBUNDLESCOPE INTEGER, ZVISIBILITYSTATE INTEGER,
            ZSAVEDASSETTYPE INTEGER, ZSORTTOKEN REAL, ZADDEDDATE REAL, ZMODIFICATIONDATE REAL, ZLASTSHAREDDATE REAL,
            ZHIDDEN INTEGER, ZAVALANCHEPICKTYPE INTEGER, ZTRASHEDSTATE INTEGER, ZTRASHEDDATE REAL,
            ZTRASHEDBYPARTICIPANT INTEGER, ZUUID TEXT, ZISRECENTLYSAVED INTEGER, ZISDETECTEDSCREENSHOT INTEGER,
            ZADJUSTMENTSSTATE INTEGER, ZAVALANCHEKIND INTEGER, ZADDITIONALATTRIBUTES INTEGER,
            ZEXTENDEDATTRIBUTES INTEGER, ZMASTER INTEGER, ZLIBRARYSCOPE INTEGER);
        CREATE TABLE ZADDITIONALASSETATTRIBUTES (Z_PK INTEGER PRIMARY KEY, ZORIGINALFILENAME TEXT,
            ZSYNDICATIONIDENTIFIER TEXT, ZIMPORTEDBY INTEGER, ZIMPORTEDBYBUNDLEIDENTIFIER TEXT,
            ZIMPORTEDBYDISPLAYNAME TEXT, ZSHARETYPE INTEGER, ZTIMEZONENAME TEXT, ZEXIFTIMESTAMPSTRING TEXT,
            ZCLOUDAVALANCHEPICKTYPE INTEGER, ZMASTERFINGERPRINT TEXT, ZADJUSTEDFINGERPRINT TEXT,
            ZORIGINALSTABLEHASH TEXT, ZADJUSTEDSTABLEHASH TEXT);
        CREATE TABLE ZCLOUDMASTER (Z_PK INTEGER PRIMARY KEY, ZORIGINALFILENAME TEXT, ZCREATIONDATE REAL);
        CREATE TABLE ZEXTENDEDATTRIBUTES (Z_PK INTEGER PRIMARY KEY, ZCAMERAMAKE TEXT, ZCAMERAMODEL TEXT,
            ZGENERATIVEAITYPE INTEGER, ZCREDIT TEXT);
        CREATE TABLE ZSHAREPARTICIPANT (Z_PK INTEGER PRIMARY KEY, ZISCURRENTUSER INTEGER, ZROLE INTEGER,
            ZEMAILADDRESS TEXT, ZPHONENUMBER TEXT, Z54_SHARE INTEGER);
        CREATE TABLE ZASSETCONTRIBUTOR (ZPARTICIPANT INTEGER, Z3LIBRARYSCOPEASSETCONTRIBUTORS INTEGER);
        CREATE TABLE ZSHARE (Z_PK INTEGER PRIMARY KEY, ZTITLE TEXT, ZSHAREURL TEXT, ZSCOPEIDENTIFIER TEXT,
            ZCREATIONDATE REAL, ZEXPIRYDATE REAL, ZCLOUDPHOTOCOUNT INTEGER,
            ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING INTEGER, ZCLOUDVIDEOCOUNT INTEGER, ZSTATUS INTEGER,
            ZSCOPETYPE INTEGER);
        INSERT INTO ZASSET (Z_PK, ZDATECREATED, ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE, ZFILENAME, ZHIDDEN,
            ZADDEDDATE, ZISRECENTLYSAVED)
            VALUES (1, 730987200.0, 1, 'IMG_0001.HEIC', 1, 731000000.0, 5);",
    )
    .unwrap();
}

#[test]
fn test_photos_parser() {
    create_photos_database("./tmp/photos_tester_source/PhotoData");
    let _ = remove_file("./tmp/photos_tester/status.log");

    let collector = r#"
[source]
ios_version = "18.1"
path = "./tmp/photos_tester_source"

[output]
name = "photos_tester"
directory = "./tmp"
format = "tsv"
compress = false
timeline = true

[[artifacts]]
artifact_name = "photos-shared-library-assets"
"#;
    parse_toml_data(collector.as_bytes()).unwrap();

    let status = read_to_string("./tmp/photos_tester/status.log").unwrap();
    assert_eq!(status, "photos-shared-library-assets:ok:1\n");

    let table = read_to_string("./tmp/photos_tester/photos-shared-library-assets.tsv").unwrap();
    let rows: Vec<Vec<&str>> = table.lines().map(|line| line.split('\t').collect()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 55);
    assert_eq!(rows[1][0], "2024-03-01 12:00:00");
    assert_eq!(rows[1][16], "Unknown-New-Value!: 5");
    assert_eq!(rows[1][27], "1-Asset Hidden-1");
    // No contributor row joins a participant or share
    for column in 40..=52 {
        assert_eq!(rows[1][column], "", "{}", rows[0][column]);
    }

    let timeline =
        read_to_string("./tmp/photos_tester/photos-shared-library-assets_timeline.jsonl").unwrap();
    assert_eq!(timeline.lines().count(), 2);
}
