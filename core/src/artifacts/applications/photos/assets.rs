use super::{error::PhotosError, layouts::SHARED_LIBRARY_LAYOUTS};
use crate::{
    artifacts::{outcome::ArtifactOutcome, registry::PHOTOS_SHARED_LIBRARY_ASSETS},
    decoder::{
        rules::decode_record,
        version::{select_layout, IosVersion},
    },
    filesystem::seek::get_file_path,
};
use chrono::FixedOffset;
use common::report::ArtifactTable;
use log::{error, info};
use rusqlite::{Connection, OpenFlags};

/// Suffix picking the database among the discovered `Photos.sqlite*` files
pub(crate) const PHOTOS_DATABASE: &str = ".sqlite";

/// Oldest iOS version with a shared library layout
pub(crate) fn minimum_supported_version() -> Option<IosVersion> {
    SHARED_LIBRARY_LAYOUTS
        .iter()
        .map(|layout| layout.min_version)
        .min()
}

/// Query the iCloud Shared Photo Library assets from `Photos.sqlite`.
/// Versions older than every layout are reported as unsupported without opening the database
pub(crate) fn grab_shared_library_assets(
    candidates: &[String],
    version: &IosVersion,
    timezone: &FixedOffset,
) -> Result<ArtifactOutcome, PhotosError> {
    let layout = match select_layout(version, &SHARED_LIBRARY_LAYOUTS) {
        Some(result) => result,
        None => {
            info!("[photos] Unsupported version for iCloud Shared Photo Library assets: iOS {version}");
            return Ok(ArtifactOutcome::Unsupported { version: *version });
        }
    };

    let path = match get_file_path(candidates, PHOTOS_DATABASE) {
        Ok(result) => result,
        Err(err) => {
            error!("[photos] Could not find Photos.sqlite: {err:?}");
            return Err(PhotosError::NoDatabase);
        }
    };

    // Bypass SQLITE file lock
    let photos_file = format!("file:{path}?immutable=1");
    let connection = Connection::open_with_flags(
        photos_file,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI,
    );
    let conn = match connection {
        Ok(connect) => connect,
        Err(err) => {
            error!("[photos] Failed to read Photos SQLITE file {err:?}");
            return Err(PhotosError::SQLITEParseError);
        }
    };

    let statement = conn.prepare(layout.query);
    let mut stmt = match statement {
        Ok(query) => query,
        Err(err) => {
            error!("[photos] Failed to compose {} SQL query {err:?}", layout.name);
            return Err(PhotosError::BadSQL);
        }
    };

    let asset_data = stmt.query_map([], |row| Ok(decode_record(row, layout.columns, timezone)));
    let asset_iter = match asset_data {
        Ok(result) => result,
        Err(err) => {
            error!("[photos] Failed to get shared library assets: {err:?}");
            return Err(PhotosError::SQLITEParseError);
        }
    };

    let mut table = ArtifactTable::new(PHOTOS_SHARED_LIBRARY_ASSETS, &layout.headers(), &path)
        .with_time_column(Some(0));
    push_assets(&mut table, asset_iter)?;

    if table.is_empty() {
        info!("[photos] No assets in iCloud Shared Photo Library found");
    }
    Ok(ArtifactOutcome::Table(table))
}

/// Add every decoded asset to the table. A failed step aborts the whole read
fn push_assets<I>(table: &mut ArtifactTable, assets: I) -> Result<(), PhotosError>
where
    I: Iterator<Item = Result<Vec<String>, rusqlite::Error>>,
{
    for asset in assets {
        let row = match asset {
            Ok(result) => result,
            Err(err) => {
                error!("[photos] Failed to iterate shared library assets: {err:?}");
                return Err(PhotosError::SQLITEParseError);
            }
        };
        if let Err(err) = table.push_row(row) {
            error!("[photos] Could not add asset row: {err:?}");
            return Err(PhotosError::Arity);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        grab_shared_library_assets, minimum_supported_version, push_assets, PhotosError,
    };
    use crate::{artifacts::outcome::ArtifactOutcome, decoder::version::IosVersion};
    use chrono::FixedOffset;
    use common::report::ArtifactTable;
    use rusqlite::{Connection, Error};
    use std::fs::{create_dir_all, remove_file};

    const SCHEMA: &str = "
        CREATE TABLE ZASSET (Z_PK INTEGER PRIMARY KEY, ZDATECREATED REAL, ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE INTEGER,
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
    ";

    const ASSETS: &str = "
        INSERT INTO ZSHARE (Z_PK, ZTITLE, ZSCOPEIDENTIFIER, ZCREATIONDATE, ZSTATUS, ZSCOPETYPE)
            VALUES (1, 'Family Library', 'SharedSync-4C2C9C7B', 720000000.0, 1, 4);
        INSERT INTO ZSHAREPARTICIPANT (Z_PK, ZISCURRENTUSER, ZROLE, ZEMAILADDRESS, Z54_SHARE)
            VALUES (1, 1, 1, 'owner@example.com', 55);
        INSERT INTO ZADDITIONALASSETATTRIBUTES (Z_PK, ZORIGINALFILENAME, ZIMPORTEDBY, ZSHARETYPE)
            VALUES (1, 'IMG_0001.HEIC', 1, 0);
        INSERT INTO ZEXTENDEDATTRIBUTES (Z_PK, ZCAMERAMAKE, ZCAMERAMODEL) VALUES (1, 'Apple', 'iPhone 14');
        INSERT INTO ZASSET (Z_PK, ZDATECREATED, ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE, ZDIRECTORY, ZFILENAME,
            ZSAVEDASSETTYPE, ZHIDDEN, ZTRASHEDSTATE, ZADDITIONALATTRIBUTES, ZEXTENDEDATTRIBUTES, ZLIBRARYSCOPE)
            VALUES (1, 730987200.9, 1, 'DCIM/100APPLE', 'IMG_0001.HEIC', 99, 1, 0, 1, 1, 1);
        INSERT INTO ZASSET (Z_PK, ZDATECREATED, ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE, ZFILENAME)
            VALUES (2, 710000000.0, 0, 'IMG_0002.HEIC');
        INSERT INTO ZASSET (Z_PK, ZDATECREATED, ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE, ZFILENAME, ZHIDDEN)
            VALUES (3, 700000000.0, 1, 'IMG_0003.HEIC', 0);
        INSERT INTO ZASSETCONTRIBUTOR (ZPARTICIPANT, Z3LIBRARYSCOPEASSETCONTRIBUTORS) VALUES (1, 1);
    ";

    fn create_database(name: &str, data: &str) -> String {
        create_dir_all("./tmp/photos").unwrap();
        let path = format!("./tmp/photos/{name}");
        let _ = remove_file(&path);

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute_batch(data).unwrap();
        path
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_grab_shared_library_assets() {
        let path = create_database("ios17_Photos.sqlite", ASSETS);
        let result =
            grab_shared_library_assets(&[path], &IosVersion::new(17, 4, 1), &utc()).unwrap();

        let table = match result {
            ArtifactOutcome::Table(table) => table,
            ArtifactOutcome::Unsupported { .. } => panic!("iOS 17 should be supported"),
        };
        assert_eq!(table.headers().len(), 52);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.time_column(), Some(0));

        let first = &table.rows()[0];
        assert_eq!(first[0], "2023-03-08 20:26:40");
        assert_eq!(first[4], "IMG_0003.HEIC");
        assert_eq!(first[25], "0-Asset Not Hidden-0");
        assert_eq!(first[36], "");
        assert_eq!(first[41], "");

        let second = &table.rows()[1];
        assert_eq!(second[0], "2024-03-01 12:00:00");
        assert_eq!(second[1], "1-Asset-In-Active-SPL-1");
        assert_eq!(second[3], "DCIM/100APPLE");
        assert_eq!(second[10], "1-Native-Back-Camera-1");
        assert_eq!(second[12], "iPhone 14");
        assert_eq!(second[16], "Unknown-New-Value!: 99");
        assert_eq!(second[25], "1-Asset Hidden-1");
        assert_eq!(second[28], "0-Asset Not In Trash-Recently Deleted-0");
        assert_eq!(second[29], "");
        assert_eq!(second[36], "1-Participant-Is_This_User-1");
        assert_eq!(second[37], "1-Participant-is-Owner-Role-1");
        assert_eq!(second[41], "Family Library");
        assert_eq!(second[49], "55-SPL-Entity-55");
        assert_eq!(second[51], "4-iCld-Shared-Photo-Library-SPL-4");
    }

    #[test]
    fn test_grab_shared_library_assets_ios18() {
        let path = create_database("ios18_Photos.sqlite", ASSETS);
        let result =
            grab_shared_library_assets(&[path], &IosVersion::new(18, 1, 0), &utc()).unwrap();

        let table = match result {
            ArtifactOutcome::Table(table) => table,
            ArtifactOutcome::Unsupported { .. } => panic!("iOS 18 should be supported"),
        };
        assert_eq!(table.headers().len(), 55);
        assert_eq!(table.rows()[1].len(), 55);
        assert_eq!(table.rows()[1][27], "1-Asset Hidden-1");
        assert_eq!(table.rows()[1][40], "1-Participant-Is_This_User-1");
        assert_eq!(table.rows()[1][53], "");
    }

    #[test]
    fn test_grab_shared_library_assets_unsupported() {
        let candidates = vec![String::from("./tmp/photos/does_not_exist/Photos.sqlite")];
        let result =
            grab_shared_library_assets(&candidates, &IosVersion::new(15, 8, 2), &utc()).unwrap();

        match result {
            ArtifactOutcome::Unsupported { version } => {
                assert_eq!(version, IosVersion::new(15, 8, 2))
            }
            ArtifactOutcome::Table(_) => panic!("iOS 15 should be unsupported"),
        }
    }

    #[test]
    fn test_grab_shared_library_assets_empty() {
        let path = create_database("empty_Photos.sqlite", "");
        let result =
            grab_shared_library_assets(&[path], &IosVersion::new(16, 0, 0), &utc()).unwrap();

        match result {
            ArtifactOutcome::Table(table) => {
                assert!(table.is_empty());
                assert_eq!(table.headers().len(), 52);
            }
            ArtifactOutcome::Unsupported { .. } => panic!("iOS 16 should be supported"),
        }
    }

    #[test]
    fn test_grab_shared_library_assets_no_database() {
        let candidates = vec![String::from("./tmp/photos/Photos.sqlite-wal")];
        let result = grab_shared_library_assets(&candidates, &IosVersion::new(17, 0, 0), &utc());
        assert!(result.is_err());
    }

    #[test]
    fn test_minimum_supported_version() {
        assert_eq!(minimum_supported_version(), Some(IosVersion::new(16, 0, 0)));
    }

    #[test]
    fn test_push_assets_step_failure() {
        let mut table = ArtifactTable::new("photos-shared-library-assets", &["Created"], "");
        let assets: Vec<Result<Vec<String>, Error>> = vec![
            Ok(vec![String::from("2024-03-01 12:00:00")]),
            Err(Error::InvalidQuery),
            Ok(vec![String::from("2024-03-02 12:00:00")]),
        ];

        let result = push_assets(&mut table, assets.into_iter());
        assert!(matches!(result, Err(PhotosError::SQLITEParseError)));
    }

    #[test]
    fn test_push_assets_arity() {
        let mut table = ArtifactTable::new("photos-shared-library-assets", &["Created"], "");
        let assets: Vec<Result<Vec<String>, Error>> = vec![Ok(vec![String::new(), String::new()])];

        let result = push_assets(&mut table, assets.into_iter());
        assert!(matches!(result, Err(PhotosError::Arity)));
        assert!(table.is_empty());
    }
}
