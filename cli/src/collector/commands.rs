use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum CommandArgs {
    /// Parse iCloud Shared Photo Library assets from Photos.sqlite
    PhotosSharedLibraryAssets {
        /// Explicit Photos.sqlite path. Skips searching the extraction
        #[arg(long, default_value = None)]
        alt_file: Option<String>,
    },
    /// Parse cached Kleinanzeigen messages
    KleinanzeigenMessages {
        /// Explicit conversation_cache path
        #[arg(long, default_value = None)]
        alt_file: Option<String>,
    },
    /// Parse the Kleinanzeigen user account
    KleinanzeigenUser {
        /// Explicit com.ebaykleinanzeigen.ebc.plist path
        #[arg(long, default_value = None)]
        alt_file: Option<String>,
    },
    /// Parse searched Kleinanzeigen keywords
    KleinanzeigenSearchHistory {
        /// Explicit com.ebaykleinanzeigen.ebc.plist path
        #[arg(long, default_value = None)]
        alt_file: Option<String>,
    },
    /// Parse the last Kleinanzeigen search query
    KleinanzeigenLastQuery {
        /// Explicit .last_search_query path
        #[arg(long, default_value = None)]
        alt_file: Option<String>,
    },
}

impl CommandArgs {
    /// Collector artifact name and optional source file
    pub(crate) fn artifact(&self) -> (&'static str, Option<String>) {
        match self {
            CommandArgs::PhotosSharedLibraryAssets { alt_file } => {
                ("photos-shared-library-assets", alt_file.clone())
            }
            CommandArgs::KleinanzeigenMessages { alt_file } => {
                ("kleinanzeigen-messages", alt_file.clone())
            }
            CommandArgs::KleinanzeigenUser { alt_file } => ("kleinanzeigen-user", alt_file.clone()),
            CommandArgs::KleinanzeigenSearchHistory { alt_file } => {
                ("kleinanzeigen-search-history", alt_file.clone())
            }
            CommandArgs::KleinanzeigenLastQuery { alt_file } => {
                ("kleinanzeigen-last-query", alt_file.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommandArgs;

    #[test]
    fn test_artifact() {
        let command = CommandArgs::KleinanzeigenUser {
            alt_file: Some(String::from("/cases/com.ebaykleinanzeigen.ebc.plist")),
        };
        let (name, alt_file) = command.artifact();
        assert_eq!(name, "kleinanzeigen-user");
        assert!(alt_file.is_some());
    }
}
