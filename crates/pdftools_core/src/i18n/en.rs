//! English catalog.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Header
    ("title", "Local PDF Tools"),
    ("subtitle", "Compress, merge, and split PDF files locally using {{link}}. No uploads required - everything stays on your device."),
    ("ghostscriptLink", "Ghostscript"),

    // Tabs
    ("compress", "Compress"),
    ("merge", "Merge"),
    ("split", "Split"),

    // Tab descriptions
    ("compressDesc", "Reduce PDF file size while maintaining quality."),
    ("mergeDesc", "Combine multiple PDF files into a single document."),
    ("splitDesc", "Extract specific page ranges from a PDF document."),

    // File input
    ("chooseFiles", "Choose PDF file{{count}} to {{operation}}"),
    ("filesSelected", "{{count}} file{{count}} selected"),
    ("clearAll", "Clear All"),
    ("addMoreFiles", "Add more files"),
    ("removeFile", "Remove file"),

    // Settings
    ("pdfQualitySetting", "PDF Quality Setting:"),
    ("pageRange", "Page Range:"),
    ("startPage", "Start page"),
    ("endPage", "End page"),
    ("to", "to"),
    ("showTerminalOutput", "Show terminal output"),
    ("showProgressBar", "Show progress bar"),
    ("useAdvancedSettings", "Use advanced settings"),
    ("useCustomCommand", "Use custom Ghostscript command"),
    ("customCommand", "Custom Command:"),
    ("customCommandPlaceholder", "e.g., -sDEVICE=pdfwrite -dPDFSETTINGS=/screen -dNOPAUSE -dQUIET -dBATCH -sOutputFile=output.pdf input.pdf"),
    ("customCommandHelp", "Enter full Ghostscript command arguments. Required: -sDEVICE= and -sOutputFile="),

    // PDF Settings
    ("screenOptimized", "Screen-optimized (smallest)"),
    ("ebook", "eBook (small)"),
    ("printer", "Printer (balanced)"),
    ("prepress", "Prepress (high quality)"),
    ("default", "Default (original quality)"),

    // Advanced Settings
    ("advancedPdfSettings", "Advanced PDF Settings"),
    ("essentialSettings", "Essential Settings"),
    ("pdfCompatibilityLevel", "PDF Compatibility Level:"),
    ("downsampleImages", "Downsample color images"),
    ("colorImageResolution", "Color Image Resolution (DPI):"),

    // Buttons
    ("compressPdf", "Compress PDF"),
    ("mergePdfs", "Merge PDFs"),
    ("splitPdf", "Split PDF"),
    ("processAgain", "Process Again"),
    ("chooseNewFiles", "Choose New Files"),
    ("tryAgain", "Try Again"),
    ("download", "Download {{filename}}"),

    // Processing states
    ("processing", "Processing your PDF{{count}}..."),
    ("processingProgress", "Processing Progress"),
    ("terminalOutput", "Terminal Output"),
    ("liveOutput", "Live Output"),
    ("initializing", "Initializing..."),
    ("processingPage", "Processing page {{page}}..."),
    ("pageOf", "Page {{current}} of {{total}}"),
    ("percentComplete", "{{percent}}% Complete"),
    ("pagesProgress", "{{current}}/{{total}} pages"),

    // Error messages
    ("errorOccurred", "An error occurred while processing your PDF:"),
    ("selectAtLeastTwoFiles", "Please select at least 2 PDF files to merge."),
    ("specifyPageRange", "Please specify page range for splitting."),
    ("validPageNumbers", "Please enter valid page numbers. End page must be greater than or equal to start page."),
    ("enterCustomCommand", "Please enter a custom command or disable custom command mode."),
    ("customCommandRequired", "Custom command must include -sDEVICE= and -sOutputFile= parameters."),

    // Features section
    ("features", "Features"),
    ("compressFeature", "Reduce file size with quality presets or custom settings"),
    ("mergeFeature", "Combine multiple PDFs into one document"),
    ("splitFeature", "Extract specific page ranges from a PDF"),
    ("customCommandsFeature", "Use advanced Ghostscript commands for power users"),
    ("terminalOutputFeature", "View real-time Ghostscript console output during processing"),
    ("progressBarFeature", "Visual progress tracking with page-by-page processing status"),

    // Privacy section
    ("privacySecurity", "Privacy & Security:"),
    ("privacyText", "All processing happens locally on your machine. No files are uploaded to any server."),
    ("viewSourceCode", "View source code on GitHub"),

    // Footer
    ("copyright", "© {{year}} Local PDF Tools. Code licensed under AGPLv3."),
    ("sponsor", "Sponsor"),

    // Language
    ("language", "Language"),
    ("english", "English"),
    ("chinese", "简体中文"),

    // Results
    ("unexpectedError", "An unexpected error occurred during processing"),
    ("savedTo", "Saved {{filename}} ({{size}} bytes) to {{path}}"),
    ("fileSize", "{{filename}} ({{size}} bytes)"),
];
