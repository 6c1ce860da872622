//! Code to label tables for Photos.sqlite asset, share and participant state columns

use crate::decoder::enumeration::EnumTable;

pub(crate) const PARTICIPATION_STATE: EnumTable = EnumTable {
    name: "ZACTIVELIBRARYSCOPEPARTICIPATIONSTATE",
    entries: &[
        (0, "0-Asset-Not-In-Active-SPL-0"),
        (1, "1-Asset-In-Active-SPL-1"),
    ],
};

pub(crate) const SYNDICATION_STATE: EnumTable = EnumTable {
    name: "ZSYNDICATIONSTATE",
    entries: &[
        (0, "0-PhDaPs-NA_or_SyndPs-Received-SWY_Synd_Asset-0"),
        (1, "1-SyndPs-Sent-SWY_Synd_Asset-1"),
        (2, "2-SyndPs-Manually-Saved_SWY_Synd_Asset-2"),
        (3, "3-SyndPs-STILLTESTING_Sent-SWY-3"),
        (
            8,
            "8-SyndPs-Linked_Asset_was_Visible_On-Device_User_Deleted_Link-8",
        ),
        (9, "9-SyndPs-STILLTESTING_Sent_SWY-9"),
        (
            10,
            "10-SyndPs-Manually-Saved_SWY_Synd_Asset_User_Deleted_From_LPL-10",
        ),
    ],
};

pub(crate) const BUNDLE_SCOPE: EnumTable = EnumTable {
    name: "ZBUNDLESCOPE",
    entries: &[
        (
            0,
            "0-iCldPhtos-ON-AssetNotInSharedAlbum_or_iCldPhtos-OFF-AssetOnLocalDevice-0",
        ),
        (1, "1-SharediCldLink_CldMastMomentAsset-1"),
        (2, "2-iCldPhtos-ON-AssetInCloudSharedAlbum-2"),
        (3, "3-iCldPhtos-ON-AssetIsInSWYConversation-3"),
    ],
};

pub(crate) const IMPORTED_BY: EnumTable = EnumTable {
    name: "ZIMPORTEDBY",
    entries: &[
        (0, "0-Cloud-Other-0"),
        (1, "1-Native-Back-Camera-1"),
        (2, "2-Native-Front-Camera-2"),
        (3, "3-Third-Party-App-3"),
        (4, "4-StillTesting-4"),
        (5, "5-PhotoBooth_PL-Asset-5"),
        (6, "6-Third-Party-App-6"),
        (7, "7-iCloud_Share_Link-CMMAsset-7"),
        (8, "8-System-Package-App-8"),
        (9, "9-Native-App-9"),
        (10, "10-StillTesting-10"),
        (11, "11-StillTesting-11"),
        (12, "12-SWY_Syndication_PL-12"),
    ],
};

pub(crate) const VISIBILITY_STATE: EnumTable = EnumTable {
    name: "ZVISIBILITYSTATE",
    entries: &[
        (0, "0-Visible-PL-CameraRoll-0"),
        (2, "2-Not-Visible-PL-CameraRoll-2"),
    ],
};

pub(crate) const SAVED_ASSET_TYPE: EnumTable = EnumTable {
    name: "ZSAVEDASSETTYPE",
    entries: &[
        (0, "0-Saved-via-other-source-0"),
        (1, "1-StillTesting-1"),
        (2, "2-StillTesting-2"),
        (3, "3-PhDaPs-Asset_or_SyndPs-Asset_NoAuto-Display-3"),
        (4, "4-Photo-Cloud-Sharing-Data-Asset-4"),
        (5, "5-PhotoBooth_Photo-Library-Asset-5"),
        (6, "6-Cloud-Photo-Library-Asset-6"),
        (7, "7-StillTesting-7"),
        (8, "8-iCloudLink_CloudMasterMomentAsset-8"),
        (12, "12-SyndPs-SWY-Asset_Auto-Display_In_CameraRoll-12"),
    ],
};

pub(crate) const SHARE_TYPE: EnumTable = EnumTable {
    name: "ZSHARETYPE",
    entries: &[
        (0, "0-Not_Shared-or-Shared_via_Phy_Device_StillTesting-0"),
        (1, "1-Shared_via_iCldPhotos_Web-or-Other_Device_StillTesting-1"),
    ],
};

pub(crate) const HIDDEN: EnumTable = EnumTable {
    name: "ZHIDDEN",
    entries: &[(0, "0-Asset Not Hidden-0"), (1, "1-Asset Hidden-1")],
};

/// Used for both the local and the cloud burst pick type
pub(crate) const AVALANCHE_PICK_TYPE: EnumTable = EnumTable {
    name: "ZAVALANCHEPICKTYPE",
    entries: &[
        (0, "0-NA-Single_Asset_Burst_UUID-0_RT"),
        (2, "2-Burst_Asset_Not_Selected-2_RT"),
        (4, "4-Burst_Asset_PhotosApp_Picked_KeyImage-4_RT"),
        (8, "8-Burst_Asset_Selected_for_LPL-8_RT"),
        (16, "16-Top_Burst_Asset_inStack_KeyImage-16_RT"),
        (32, "32-StillTesting-32_RT"),
        (52, "52-Burst_Asset_Visible_LPL-52"),
    ],
};

pub(crate) const TRASHED_STATE: EnumTable = EnumTable {
    name: "ZTRASHEDSTATE",
    entries: &[
        (0, "0-Asset Not In Trash-Recently Deleted-0"),
        (1, "1-Asset In Trash-Recently Deleted-1"),
    ],
};

pub(crate) const IS_CURRENT_USER: EnumTable = EnumTable {
    name: "ZISCURRENTUSER",
    entries: &[
        (0, "0-Participant-Not_This_User-0"),
        (1, "1-Participant-Is_This_User-1"),
    ],
};

pub(crate) const PARTICIPANT_ROLE: EnumTable = EnumTable {
    name: "ZROLE",
    entries: &[
        (1, "1-Participant-is-Owner-Role-1"),
        (2, "2-Participant-is-Invitee-Role-2"),
    ],
};

pub(crate) const SHARE_ENTITY: EnumTable = EnumTable {
    name: "Z54_SHARE",
    entries: &[
        (55, "55-SPL-Entity-55"),
        (56, "56-CMM-iCloud-Link-Entity-56"),
        (63, "63-SPL-Active-Participant-iOS18-63"),
        (64, "64-CMM-iCloud-Link-iOS18-64"),
    ],
};

pub(crate) const SHARE_STATUS: EnumTable = EnumTable {
    name: "ZSTATUS",
    entries: &[
        (1, "1-Active_Share-CMM_or_SPL-1"),
        (3, "3-SPL-Actively-Sharing-3"),
    ],
};

pub(crate) const SCOPE_TYPE: EnumTable = EnumTable {
    name: "ZSCOPETYPE",
    entries: &[
        (2, "2-iCloudLink-CMMoment-2"),
        (4, "4-iCld-Shared-Photo-Library-SPL-4"),
        (5, "5-SPL-Active-Participant-5"),
    ],
};

// iOS 18 additions

pub(crate) const RECENTLY_SAVED: EnumTable = EnumTable {
    name: "ZISRECENTLYSAVED",
    entries: &[
        (0, "0-Not_Recently_Saved iOS18_Still_Testing-0"),
        (1, "1-Recently_Saved iOS18_Still_Testing-1"),
    ],
};

pub(crate) const DETECTED_SCREENSHOT: EnumTable = EnumTable {
    name: "ZISDETECTEDSCREENSHOT",
    entries: &[
        (0, "0-Not_Detected_Screenshot iOS18_Still_Testing-0"),
        (1, "1-Detected_Screenshot iOS18_Still_Testing-1"),
    ],
};

pub(crate) const ADJUSTMENTS_STATE: EnumTable = EnumTable {
    name: "ZADJUSTMENTSSTATE",
    entries: &[
        (0, "0-No-Adjustments-0"),
        (2, "2-Yes-Adjustments iOS18_needs_update_Decoding-2"),
        (3, "3-Yes-Adjustments iOS18_needs_update_Decoding-3"),
    ],
};

pub(crate) const AVALANCHE_KIND: EnumTable = EnumTable {
    name: "ZAVALANCHEKIND",
    entries: &[
        (0, "0-No_Avalanche iOS18_Still_Testing-0"),
        (1, "1-Is_Avalanche iOS18_Still_Testing-1"),
    ],
};

pub(crate) const GENERATIVE_AI_TYPE: EnumTable = EnumTable {
    name: "ZGENERATIVEAITYPE",
    entries: &[(0, "0-Not_Generative_AI iOS18_Still_Testing-0")],
};
