use super::enums::{
    ADJUSTMENTS_STATE, AVALANCHE_KIND, AVALANCHE_PICK_TYPE, BUNDLE_SCOPE, DETECTED_SCREENSHOT,
    GENERATIVE_AI_TYPE, HIDDEN, IMPORTED_BY, IS_CURRENT_USER, PARTICIPANT_ROLE,
    PARTICIPATION_STATE, RECENTLY_SAVED, SAVED_ASSET_TYPE, SCOPE_TYPE, SHARE_ENTITY, SHARE_STATUS,
    SHARE_TYPE, SYNDICATION_STATE, TRASHED_STATE, VISIBILITY_STATE,
};
use crate::decoder::{
    rules::{Column, Layout, Rule},
    version::IosVersion,
};

/// Shared Photo Library layouts, oldest first. Each layout owns its query, headers and rules
pub(crate) static SHARED_LIBRARY_LAYOUTS: [Layout; 2] = [
    Layout {
        name: "iOS 16-17",
        min_version: IosVersion::new(16, 0, 0),
        query: IOS16_QUERY,
        columns: &IOS16_COLUMNS,
    },
    Layout {
        name: "iOS 18+",
        min_version: IosVersion::new(18, 0, 0),
        query: IOS18_QUERY,
        columns: &IOS18_COLUMNS,
    },
];

const IOS16_QUERY: &str = "SELECT
    zAsset.ZDATECREATED AS zAsset_ZDATECREATED,
    zAsset.ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE AS zAsset_ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE,
    zAsset.Z_PK AS zAsset_Z_PK,
    zAsset.ZDIRECTORY AS zAsset_ZDIRECTORY,
    zAsset.ZFILENAME AS zAsset_ZFILENAME,
    zAddAssetAttr.ZORIGINALFILENAME AS zAddAssetAttr_ZORIGINALFILENAME,
    zCldMast.ZORIGINALFILENAME AS zCldMast_ZORIGINALFILENAME,
    zAddAssetAttr.ZSYNDICATIONIDENTIFIER AS zAddAssetAttr_ZSYNDICATIONIDENTIFIER,
    zAsset.ZSYNDICATIONSTATE AS zAsset_ZSYNDICATIONSTATE,
    zAsset.ZBUNDLESCOPE AS zAsset_ZBUNDLESCOPE,
    zAddAssetAttr.ZIMPORTEDBY AS zAddAssetAttr_ZIMPORTEDBY,
    zExtAttr.ZCAMERAMAKE AS zExtAttr_ZCAMERAMAKE,
    zExtAttr.ZCAMERAMODEL AS zExtAttr_ZCAMERAMODEL,
    zAddAssetAttr.ZIMPORTEDBYBUNDLEIDENTIFIER AS zAddAssetAttr_ZIMPORTEDBYBUNDLEIDENTIFIER,
    zAddAssetAttr.ZIMPORTEDBYDISPLAYNAME AS zAddAssetAttr_ZIMPORTEDBYDISPLAYNAME,
    zAsset.ZVISIBILITYSTATE AS zAsset_ZVISIBILITYSTATE,
    zAsset.ZSAVEDASSETTYPE AS zAsset_ZSAVEDASSETTYPE,
    zAddAssetAttr.ZSHARETYPE AS zAddAssetAttr_ZSHARETYPE,
    zAsset.ZSORTTOKEN AS zAsset_ZSORTTOKEN,
    zAsset.ZADDEDDATE AS zAsset_ZADDEDDATE,
    zCldMast.ZCREATIONDATE AS zCldMast_ZCREATIONDATE,
    zAddAssetAttr.ZTIMEZONENAME AS zAddAssetAttr_ZTIMEZONENAME,
    zAddAssetAttr.ZEXIFTIMESTAMPSTRING AS zAddAssetAttr_ZEXIFTIMESTAMPSTRING,
    zAsset.ZMODIFICATIONDATE AS zAsset_ZMODIFICATIONDATE,
    zAsset.ZLASTSHAREDDATE AS zAsset_ZLASTSHAREDDATE,
    zAsset.ZHIDDEN AS zAsset_ZHIDDEN,
    zAsset.ZAVALANCHEPICKTYPE AS zAsset_ZAVALANCHEPICKTYPE,
    zAddAssetAttr.ZCLOUDAVALANCHEPICKTYPE AS zAddAssetAttr_ZCLOUDAVALANCHEPICKTYPE,
    zAsset.ZTRASHEDSTATE AS zAsset_ZTRASHEDSTATE,
    zAsset.ZTRASHEDDATE AS zAsset_ZTRASHEDDATE,
    zAsset.ZTRASHEDBYPARTICIPANT AS zAsset_ZTRASHEDBYPARTICIPANT,
    zAddAssetAttr.Z_PK AS zAddAssetAttr_Z_PK,
    zAsset.ZUUID AS zAsset_ZUUID,
    zAddAssetAttr.ZMASTERFINGERPRINT AS zAddAssetAttr_ZMASTERFINGERPRINT,
    zAddAssetAttr.ZADJUSTEDFINGERPRINT AS zAddAssetAttr_ZADJUSTEDFINGERPRINT,
    SPLzSharePartic.ZISCURRENTUSER AS SPLzSharePartic_ZISCURRENTUSER,
    SPLzSharePartic.ZROLE AS SPLzSharePartic_ZROLE,
    zAssetContrib.ZPARTICIPANT AS zAssetContrib_ZPARTICIPANT,
    SPLzSharePartic.ZEMAILADDRESS AS SPLzSharePartic_ZEMAILADDRESS,
    SPLzSharePartic.ZPHONENUMBER AS SPLzSharePartic_ZPHONENUMBER,
    SPLzShare.ZTITLE AS SPLzShare_ZTITLE,
    SPLzShare.ZSHAREURL AS SPLzShare_ZSHAREURL,
    SPLzShare.ZSCOPEIDENTIFIER AS SPLzShare_ZSCOPEIDENTIFIER,
    SPLzShare.ZCREATIONDATE AS SPLzShare_ZCREATIONDATE,
    SPLzShare.ZEXPIRYDATE AS SPLzShare_ZEXPIRYDATE,
    SPLzShare.ZCLOUDPHOTOCOUNT AS SPLzShare_ZCLOUDPHOTOCOUNT,
    SPLzShare.ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING AS SPLzShare_ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING,
    SPLzShare.ZCLOUDVIDEOCOUNT AS SPLzShare_ZCLOUDVIDEOCOUNT,
    SPLzSharePartic.Z54_SHARE AS SPLzSharePartic_Z54_SHARE,
    SPLzShare.ZSTATUS AS SPLzShare_ZSTATUS,
    SPLzShare.ZSCOPETYPE AS SPLzShare_ZSCOPETYPE
  FROM ZASSET zAsset
    LEFT JOIN ZADDITIONALASSETATTRIBUTES zAddAssetAttr ON zAddAssetAttr.Z_PK = zAsset.ZADDITIONALATTRIBUTES
    LEFT JOIN ZEXTENDEDATTRIBUTES zExtAttr ON zExtAttr.Z_PK = zAsset.ZEXTENDEDATTRIBUTES
    LEFT JOIN ZCLOUDMASTER zCldMast ON zAsset.ZMASTER = zCldMast.Z_PK
    LEFT JOIN ZSHARE SPLzShare ON SPLzShare.Z_PK = zAsset.ZLIBRARYSCOPE
    LEFT JOIN ZASSETCONTRIBUTOR zAssetContrib ON zAssetContrib.Z3LIBRARYSCOPEASSETCONTRIBUTORS = zAsset.Z_PK
    LEFT JOIN ZSHAREPARTICIPANT SPLzSharePartic ON SPLzSharePartic.Z_PK = zAssetContrib.ZPARTICIPANT
  WHERE zAsset.ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE = 1
  ORDER BY zAsset.ZDATECREATED";

static IOS16_COLUMNS: [Column; 52] = [
    Column {
        header: "zAsset-Date Created-0",
        field: "zAsset_ZDATECREATED",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Active Library Scope Participation State-1",
        field: "zAsset_ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE",
        rule: Rule::Enumerated(&PARTICIPATION_STATE),
    },
    Column {
        header: "zAsset-zPK-2",
        field: "zAsset_Z_PK",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Directory-Path-3",
        field: "zAsset_ZDIRECTORY",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Filename-4",
        field: "zAsset_ZFILENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr- Original Filename-5",
        field: "zAddAssetAttr_ZORIGINALFILENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zCldMast- Original Filename-6",
        field: "zCldMast_ZORIGINALFILENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr- Syndication Identifier-SWY-Files-7",
        field: "zAddAssetAttr_ZSYNDICATIONIDENTIFIER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Syndication State-8",
        field: "zAsset_ZSYNDICATIONSTATE",
        rule: Rule::Enumerated(&SYNDICATION_STATE),
    },
    Column {
        header: "zAsset-Bundle Scope-9",
        field: "zAsset_ZBUNDLESCOPE",
        rule: Rule::Enumerated(&BUNDLE_SCOPE),
    },
    Column {
        header: "zAddAssetAttr-Imported by-10",
        field: "zAddAssetAttr_ZIMPORTEDBY",
        rule: Rule::Enumerated(&IMPORTED_BY),
    },
    Column {
        header: "zExtAttr-Camera Make-11",
        field: "zExtAttr_ZCAMERAMAKE",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zExtAttr-Camera Model-12",
        field: "zExtAttr_ZCAMERAMODEL",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr.Imported by Bundle Identifier-13",
        field: "zAddAssetAttr_ZIMPORTEDBYBUNDLEIDENTIFIER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-Imported By Display Name-14",
        field: "zAddAssetAttr_ZIMPORTEDBYDISPLAYNAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Visibility State-15",
        field: "zAsset_ZVISIBILITYSTATE",
        rule: Rule::Enumerated(&VISIBILITY_STATE),
    },
    Column {
        header: "zAsset-Saved Asset Type-16",
        field: "zAsset_ZSAVEDASSETTYPE",
        rule: Rule::Enumerated(&SAVED_ASSET_TYPE),
    },
    Column {
        header: "zAddAssetAttr-Share Type-17",
        field: "zAddAssetAttr_ZSHARETYPE",
        rule: Rule::Enumerated(&SHARE_TYPE),
    },
    Column {
        header: "zAsset- SortToken -CameraRoll-18",
        field: "zAsset_ZSORTTOKEN",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Added Date-19",
        field: "zAsset_ZADDEDDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zCldMast-Creation Date-20",
        field: "zCldMast_ZCREATIONDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAddAssetAttr-Time Zone Name-21",
        field: "zAddAssetAttr_ZTIMEZONENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-EXIF-String-22",
        field: "zAddAssetAttr_ZEXIFTIMESTAMPSTRING",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Modification Date-23",
        field: "zAsset_ZMODIFICATIONDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Last Shared Date-24",
        field: "zAsset_ZLASTSHAREDDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Hidden-25",
        field: "zAsset_ZHIDDEN",
        rule: Rule::Enumerated(&HIDDEN),
    },
    Column {
        header: "zAsset-Avalanche_Pick_Type-BurstAsset-26",
        field: "zAsset_ZAVALANCHEPICKTYPE",
        rule: Rule::Enumerated(&AVALANCHE_PICK_TYPE),
    },
    Column {
        header: "zAddAssetAttr-Cloud_Avalanche_Pick_Type-BurstAsset-27",
        field: "zAddAssetAttr_ZCLOUDAVALANCHEPICKTYPE",
        rule: Rule::Enumerated(&AVALANCHE_PICK_TYPE),
    },
    Column {
        header: "zAsset-Trashed State-LocalAssetRecentlyDeleted-28",
        field: "zAsset_ZTRASHEDSTATE",
        rule: Rule::Enumerated(&TRASHED_STATE),
    },
    Column {
        header: "zAsset-Trashed Date-29",
        field: "zAsset_ZTRASHEDDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Trashed by Participant= zShareParticipant_zPK-30",
        field: "zAsset_ZTRASHEDBYPARTICIPANT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-Share Type-31",
        field: "zAddAssetAttr_ZSHARETYPE",
        rule: Rule::Enumerated(&SHARE_TYPE),
    },
    Column {
        header: "zAddAssetAttr-zPK-32",
        field: "zAddAssetAttr_Z_PK",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-UUID = store.cloudphotodb-33",
        field: "zAsset_ZUUID",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-Master Fingerprint-34",
        field: "zAddAssetAttr_ZMASTERFINGERPRINT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr.Adjusted Fingerprint-35",
        field: "zAddAssetAttr_ZADJUSTEDFINGERPRINT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-Is Current User-36",
        field: "SPLzSharePartic_ZISCURRENTUSER",
        rule: Rule::Enumerated(&IS_CURRENT_USER),
    },
    Column {
        header: "SPLzSharePartic-Role-37",
        field: "SPLzSharePartic_ZROLE",
        rule: Rule::Enumerated(&PARTICIPANT_ROLE),
    },
    Column {
        header: "zAsstContrib-Participant= zSharePartic-zPK-38",
        field: "zAssetContrib_ZPARTICIPANT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-Email Address-39",
        field: "SPLzSharePartic_ZEMAILADDRESS",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-Phone Number-40",
        field: "SPLzSharePartic_ZPHONENUMBER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Title-SPL-41",
        field: "SPLzShare_ZTITLE",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Share URL-SPL-42",
        field: "SPLzShare_ZSHAREURL",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Scope ID-SPL-43",
        field: "SPLzShare_ZSCOPEIDENTIFIER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Creation Date-SPL-44",
        field: "SPLzShare_ZCREATIONDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "SPLzShare-Expiry Date-SPL-45",
        field: "SPLzShare_ZEXPIRYDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "SPLzShare-Cloud Photo Count-SPL-46",
        field: "SPLzShare_ZCLOUDPHOTOCOUNT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Assets AddedByCamera SmartSharing-47",
        field: "SPLzShare_ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Cloud Video Count-SPL-48",
        field: "SPLzShare_ZCLOUDVIDEOCOUNT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-z54SHARE-49",
        field: "SPLzSharePartic_Z54_SHARE",
        rule: Rule::Enumerated(&SHARE_ENTITY),
    },
    Column {
        header: "SPLzShare-Status-50",
        field: "SPLzShare_ZSTATUS",
        rule: Rule::Enumerated(&SHARE_STATUS),
    },
    Column {
        header: "SPLzShare-Scope Type-51",
        field: "SPLzShare_ZSCOPETYPE",
        rule: Rule::Enumerated(&SCOPE_TYPE),
    },
];

const IOS18_QUERY: &str = "SELECT
    zAsset.ZDATECREATED AS zAsset_ZDATECREATED,
    zAsset.ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE AS zAsset_ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE,
    zAsset.Z_PK AS zAsset_Z_PK,
    zAsset.ZDIRECTORY AS zAsset_ZDIRECTORY,
    zAsset.ZFILENAME AS zAsset_ZFILENAME,
    zAddAssetAttr.ZORIGINALFILENAME AS zAddAssetAttr_ZORIGINALFILENAME,
    zCldMast.ZORIGINALFILENAME AS zCldMast_ZORIGINALFILENAME,
    zAddAssetAttr.ZSYNDICATIONIDENTIFIER AS zAddAssetAttr_ZSYNDICATIONIDENTIFIER,
    zAsset.ZSYNDICATIONSTATE AS zAsset_ZSYNDICATIONSTATE,
    zAsset.ZBUNDLESCOPE AS zAsset_ZBUNDLESCOPE,
    zAddAssetAttr.ZIMPORTEDBY AS zAddAssetAttr_ZIMPORTEDBY,
    zExtAttr.ZCAMERAMAKE AS zExtAttr_ZCAMERAMAKE,
    zExtAttr.ZCAMERAMODEL AS zExtAttr_ZCAMERAMODEL,
    zAddAssetAttr.ZIMPORTEDBYBUNDLEIDENTIFIER AS zAddAssetAttr_ZIMPORTEDBYBUNDLEIDENTIFIER,
    zAddAssetAttr.ZIMPORTEDBYDISPLAYNAME AS zAddAssetAttr_ZIMPORTEDBYDISPLAYNAME,
    zAsset.ZVISIBILITYSTATE AS zAsset_ZVISIBILITYSTATE,
    zAsset.ZISRECENTLYSAVED AS zAsset_ZISRECENTLYSAVED,
    zAsset.ZSAVEDASSETTYPE AS zAsset_ZSAVEDASSETTYPE,
    zAddAssetAttr.ZSHARETYPE AS zAddAssetAttr_ZSHARETYPE,
    zAsset.ZSORTTOKEN AS zAsset_ZSORTTOKEN,
    zAsset.ZADDEDDATE AS zAsset_ZADDEDDATE,
    zCldMast.ZCREATIONDATE AS zCldMast_ZCREATIONDATE,
    zAddAssetAttr.ZTIMEZONENAME AS zAddAssetAttr_ZTIMEZONENAME,
    zAddAssetAttr.ZEXIFTIMESTAMPSTRING AS zAddAssetAttr_ZEXIFTIMESTAMPSTRING,
    zAsset.ZMODIFICATIONDATE AS zAsset_ZMODIFICATIONDATE,
    zAsset.ZLASTSHAREDDATE AS zAsset_ZLASTSHAREDDATE,
    zAsset.ZISDETECTEDSCREENSHOT AS zAsset_ZISDETECTEDSCREENSHOT,
    zAsset.ZHIDDEN AS zAsset_ZHIDDEN,
    zAsset.ZADJUSTMENTSSTATE AS zAsset_ZADJUSTMENTSSTATE,
    zAsset.ZAVALANCHEKIND AS zAsset_ZAVALANCHEKIND,
    zAsset.ZAVALANCHEPICKTYPE AS zAsset_ZAVALANCHEPICKTYPE,
    zAddAssetAttr.ZCLOUDAVALANCHEPICKTYPE AS zAddAssetAttr_ZCLOUDAVALANCHEPICKTYPE,
    zAsset.ZTRASHEDSTATE AS zAsset_ZTRASHEDSTATE,
    zAsset.ZTRASHEDDATE AS zAsset_ZTRASHEDDATE,
    zAsset.ZTRASHEDBYPARTICIPANT AS zAsset_ZTRASHEDBYPARTICIPANT,
    zAddAssetAttr.Z_PK AS zAddAssetAttr_Z_PK,
    zAsset.ZUUID AS zAsset_ZUUID,
    zAddAssetAttr.ZORIGINALSTABLEHASH AS zAddAssetAttr_ZORIGINALSTABLEHASH,
    zAddAssetAttr.ZADJUSTEDSTABLEHASH AS zAddAssetAttr_ZADJUSTEDSTABLEHASH,
    SPLzSharePartic.ZISCURRENTUSER AS SPLzSharePartic_ZISCURRENTUSER,
    SPLzSharePartic.ZROLE AS SPLzSharePartic_ZROLE,
    zAssetContrib.ZPARTICIPANT AS zAssetContrib_ZPARTICIPANT,
    SPLzSharePartic.ZEMAILADDRESS AS SPLzSharePartic_ZEMAILADDRESS,
    SPLzSharePartic.ZPHONENUMBER AS SPLzSharePartic_ZPHONENUMBER,
    SPLzShare.ZTITLE AS SPLzShare_ZTITLE,
    SPLzShare.ZSHAREURL AS SPLzShare_ZSHAREURL,
    SPLzShare.ZSCOPEIDENTIFIER AS SPLzShare_ZSCOPEIDENTIFIER,
    SPLzShare.ZCREATIONDATE AS SPLzShare_ZCREATIONDATE,
    SPLzShare.ZEXPIRYDATE AS SPLzShare_ZEXPIRYDATE,
    SPLzShare.ZCLOUDPHOTOCOUNT AS SPLzShare_ZCLOUDPHOTOCOUNT,
    SPLzShare.ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING AS SPLzShare_ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING,
    SPLzShare.ZCLOUDVIDEOCOUNT AS SPLzShare_ZCLOUDVIDEOCOUNT,
    zExtAttr.ZGENERATIVEAITYPE AS zExtAttr_ZGENERATIVEAITYPE,
    zExtAttr.ZCREDIT AS zExtAttr_ZCREDIT
  FROM ZASSET zAsset
    LEFT JOIN ZADDITIONALASSETATTRIBUTES zAddAssetAttr ON zAddAssetAttr.Z_PK = zAsset.ZADDITIONALATTRIBUTES
    LEFT JOIN ZEXTENDEDATTRIBUTES zExtAttr ON zExtAttr.Z_PK = zAsset.ZEXTENDEDATTRIBUTES
    LEFT JOIN ZCLOUDMASTER zCldMast ON zAsset.ZMASTER = zCldMast.Z_PK
    LEFT JOIN ZSHARE SPLzShare ON SPLzShare.Z_PK = zAsset.ZLIBRARYSCOPE
    LEFT JOIN ZASSETCONTRIBUTOR zAssetContrib ON zAssetContrib.Z3LIBRARYSCOPEASSETCONTRIBUTORS = zAsset.Z_PK
    LEFT JOIN ZSHAREPARTICIPANT SPLzSharePartic ON SPLzSharePartic.Z_PK = zAssetContrib.ZPARTICIPANT
  WHERE zAsset.ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE = 1
  ORDER BY zAsset.ZDATECREATED";

static IOS18_COLUMNS: [Column; 55] = [
    Column {
        header: "zAsset-Date Created-0",
        field: "zAsset_ZDATECREATED",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Active Library Scope Participation State-1",
        field: "zAsset_ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE",
        rule: Rule::Enumerated(&PARTICIPATION_STATE),
    },
    Column {
        header: "zAsset-zPK-2",
        field: "zAsset_Z_PK",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Directory-Path-3",
        field: "zAsset_ZDIRECTORY",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Filename-4",
        field: "zAsset_ZFILENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr- Original Filename-5",
        field: "zAddAssetAttr_ZORIGINALFILENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zCldMast- Original Filename-6",
        field: "zCldMast_ZORIGINALFILENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr- Syndication Identifier-SWY-Files-7",
        field: "zAddAssetAttr_ZSYNDICATIONIDENTIFIER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Syndication State-8",
        field: "zAsset_ZSYNDICATIONSTATE",
        rule: Rule::Enumerated(&SYNDICATION_STATE),
    },
    Column {
        header: "zAsset-Bundle Scope-9",
        field: "zAsset_ZBUNDLESCOPE",
        rule: Rule::Enumerated(&BUNDLE_SCOPE),
    },
    Column {
        header: "zAddAssetAttr-Imported by-10",
        field: "zAddAssetAttr_ZIMPORTEDBY",
        rule: Rule::Enumerated(&IMPORTED_BY),
    },
    Column {
        header: "zExtAttr-Camera Make-11",
        field: "zExtAttr_ZCAMERAMAKE",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zExtAttr-Camera Model-12",
        field: "zExtAttr_ZCAMERAMODEL",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr- Imported by Bundle Identifier-13",
        field: "zAddAssetAttr_ZIMPORTEDBYBUNDLEIDENTIFIER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr- Imported By Display Name-14",
        field: "zAddAssetAttr_ZIMPORTEDBYDISPLAYNAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Visibility State-15",
        field: "zAsset_ZVISIBILITYSTATE",
        rule: Rule::Enumerated(&VISIBILITY_STATE),
    },
    Column {
        header: "zAsset-Is_Recently_Saved-iOS18-16",
        field: "zAsset_ZISRECENTLYSAVED",
        rule: Rule::Enumerated(&RECENTLY_SAVED),
    },
    Column {
        header: "zAsset-Saved Asset Type-17",
        field: "zAsset_ZSAVEDASSETTYPE",
        rule: Rule::Enumerated(&SAVED_ASSET_TYPE),
    },
    Column {
        header: "zAddAssetAttr-Share Type-18",
        field: "zAddAssetAttr_ZSHARETYPE",
        rule: Rule::Enumerated(&SHARE_TYPE),
    },
    Column {
        header: "zAsset- SortToken -CameraRoll-19",
        field: "zAsset_ZSORTTOKEN",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Added Date-20",
        field: "zAsset_ZADDEDDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zCldMast-Creation Date-21",
        field: "zCldMast_ZCREATIONDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAddAssetAttr-Time Zone Name-22",
        field: "zAddAssetAttr_ZTIMEZONENAME",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-EXIF-String-23",
        field: "zAddAssetAttr_ZEXIFTIMESTAMPSTRING",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-Modification Date-24",
        field: "zAsset_ZMODIFICATIONDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Last Shared Date-25",
        field: "zAsset_ZLASTSHAREDDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Is_Detected_Screenshot-iOS18-26",
        field: "zAsset_ZISDETECTEDSCREENSHOT",
        rule: Rule::Enumerated(&DETECTED_SCREENSHOT),
    },
    Column {
        header: "zAsset-Hidden-27",
        field: "zAsset_ZHIDDEN",
        rule: Rule::Enumerated(&HIDDEN),
    },
    Column {
        header: "zAsset-Adjustments_State-Camera-Effects-Filters-iOS18-28",
        field: "zAsset_ZADJUSTMENTSSTATE",
        rule: Rule::Enumerated(&ADJUSTMENTS_STATE),
    },
    Column {
        header: "zAsset-Avalanche_Kind-iOS18-29",
        field: "zAsset_ZAVALANCHEKIND",
        rule: Rule::Enumerated(&AVALANCHE_KIND),
    },
    Column {
        header: "zAsset-Avalanche_Pick_Type-BurstAsset-30",
        field: "zAsset_ZAVALANCHEPICKTYPE",
        rule: Rule::Enumerated(&AVALANCHE_PICK_TYPE),
    },
    Column {
        header: "zAddAssetAttr-Cloud_Avalanche_Pick_Type-BurstAsset-31",
        field: "zAddAssetAttr_ZCLOUDAVALANCHEPICKTYPE",
        rule: Rule::Enumerated(&AVALANCHE_PICK_TYPE),
    },
    Column {
        header: "zAsset-Trashed State-LocalAssetRecentlyDeleted-32",
        field: "zAsset_ZTRASHEDSTATE",
        rule: Rule::Enumerated(&TRASHED_STATE),
    },
    Column {
        header: "zAsset-Trashed Date-33",
        field: "zAsset_ZTRASHEDDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "zAsset-Trashed by Participant= zShareParticipant_zPK-34",
        field: "zAsset_ZTRASHEDBYPARTICIPANT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-Share Type-35",
        field: "zAddAssetAttr_ZSHARETYPE",
        rule: Rule::Enumerated(&SHARE_TYPE),
    },
    Column {
        header: "zAddAssetAttr-zPK-36",
        field: "zAddAssetAttr_Z_PK",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAsset-UUID = store.cloudphotodb-37",
        field: "zAsset_ZUUID",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr-Original Stable Hash-iOS18-38",
        field: "zAddAssetAttr_ZORIGINALSTABLEHASH",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zAddAssetAttr.Adjusted Stable Hash-iOS18-39",
        field: "zAddAssetAttr_ZADJUSTEDSTABLEHASH",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-Is Current User-40",
        field: "SPLzSharePartic_ZISCURRENTUSER",
        rule: Rule::Enumerated(&IS_CURRENT_USER),
    },
    Column {
        header: "SPLzSharePartic-Role-41",
        field: "SPLzSharePartic_ZROLE",
        rule: Rule::Enumerated(&PARTICIPANT_ROLE),
    },
    Column {
        header: "zAsstContrib-Participant= zSharePartic-zPK-42",
        field: "zAssetContrib_ZPARTICIPANT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-Email Address-43",
        field: "SPLzSharePartic_ZEMAILADDRESS",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzSharePartic-Phone Number-44",
        field: "SPLzSharePartic_ZPHONENUMBER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Title-SPL-45",
        field: "SPLzShare_ZTITLE",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Share URL-SPL-46",
        field: "SPLzShare_ZSHAREURL",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Scope ID-SPL-47",
        field: "SPLzShare_ZSCOPEIDENTIFIER",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Creation Date-SPL-48",
        field: "SPLzShare_ZCREATIONDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "SPLzShare-Expiry Date-SPL-49",
        field: "SPLzShare_ZEXPIRYDATE",
        rule: Rule::Timestamp,
    },
    Column {
        header: "SPLzShare-Cloud Photo Count-SPL-50",
        field: "SPLzShare_ZCLOUDPHOTOCOUNT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Assets AddedByCamera SmartSharing-51",
        field: "SPLzShare_ZCOUNTOFASSETSADDEDBYCAMERASMARTSHARING",
        rule: Rule::PassThrough,
    },
    Column {
        header: "SPLzShare-Cloud Video Count-SPL-52",
        field: "SPLzShare_ZCLOUDVIDEOCOUNT",
        rule: Rule::PassThrough,
    },
    Column {
        header: "zExtAttr-Generative_AI_Type-iOS18-53",
        field: "zExtAttr_ZGENERATIVEAITYPE",
        rule: Rule::Enumerated(&GENERATIVE_AI_TYPE),
    },
    Column {
        header: "zExtAttr-Credit-iOS18-54",
        field: "zExtAttr_ZCREDIT",
        rule: Rule::PassThrough,
    },
];
