/// File dialog pre-loaded with the archive filters the build supports.
#[macro_export]
macro_rules! comic_filters {
    () => {{
        let extensions = comic_archive::supported_extensions();
        let dialog = rfd::FileDialog::new()
            .add_filter("Comic Book Archive", &extensions)
            .add_filter("Comic ZIP", &["cbz", "zip"]);
        #[cfg(feature = "rar")]
        let dialog = dialog.add_filter("Comic RAR", &["cbr", "rar"]);
        #[cfg(feature = "7z")]
        let dialog = dialog.add_filter("Comic 7z", &["cb7", "7z"]);
        dialog
    }};
}
