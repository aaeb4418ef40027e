//! The built-in tool list.

use super::model::{ToolCategory, ToolRecord, ToolStatus};

struct Definition {
    id: &'static str,
    name: &'static str,
    slug: &'static str,
    category: ToolCategory,
    icon: &'static str,
    description: &'static str,
    seo_title: &'static str,
    seo_description: &'static str,
    keywords: &'static [&'static str],
    is_premium: bool,
}

const DEFINITIONS: &[Definition] = &[
    Definition {
        id: "qr-gen",
        name: "QR Code Generator",
        slug: "qr-code-generator",
        category: ToolCategory::Utility,
        icon: "fa-qrcode",
        description: "Generate customizable QR codes for URLs, text, and more.",
        seo_title: "Free Online QR Code Generator | Toolly.online",
        seo_description: "Create high-quality QR codes instantly. Download as PNG or share.",
        keywords: &["qr code", "generator", "free", "online"],
        is_premium: false,
    },
    Definition {
        id: "ai-img",
        name: "AI Image Generator",
        slug: "ai-image-generator",
        category: ToolCategory::Ai,
        icon: "fa-wand-magic-sparkles",
        description: "Transform text into stunning images using advanced AI.",
        seo_title: "AI Text-to-Image Generator | Toolly.online",
        seo_description: "Generate professional images from text prompts using Google Gemini AI.",
        keywords: &["ai image", "text to image", "stable diffusion", "gemini"],
        is_premium: false,
    },
    Definition {
        id: "url-short",
        name: "URL Shortener",
        slug: "url-shortener",
        category: ToolCategory::Utility,
        icon: "fa-link",
        description: "Shorten long URLs into manageable links.",
        seo_title: "Free URL Shortener | Toolly.online",
        seo_description: "Simple and fast URL shortening service.",
        keywords: &["url", "shortener", "link", "tinyurl"],
        is_premium: false,
    },
    Definition {
        id: "json-format",
        name: "JSON Formatter",
        slug: "json-formatter",
        category: ToolCategory::Developer,
        icon: "fa-code",
        description: "Beautify, validate, and minify JSON data.",
        seo_title: "Online JSON Formatter & Validator | Toolly.online",
        seo_description: "Clean up your JSON code with one click. Error detection included.",
        keywords: &["json", "formatter", "beautifier", "validator"],
        is_premium: false,
    },
    Definition {
        id: "pw-gen",
        name: "Password Generator",
        slug: "password-generator",
        category: ToolCategory::Utility,
        icon: "fa-key",
        description: "Create strong, secure, and customizable passwords.",
        seo_title: "Secure Password Generator | Toolly.online",
        seo_description: "Generate unhackable passwords with custom length and character sets.",
        keywords: &["password", "security", "generator", "safe"],
        is_premium: false,
    },
    Definition {
        id: "img-comp",
        name: "Image Compressor",
        slug: "image-compressor",
        category: ToolCategory::Media,
        icon: "fa-file-image",
        description: "Reduce image file size without losing quality.",
        seo_title: "Online Image Compressor | Optimize JPG & PNG",
        seo_description: "Fast, client-side image compression for web optimization.",
        keywords: &["image", "compress", "optimize", "png", "jpg"],
        is_premium: false,
    },
    Definition {
        id: "txt-speech",
        name: "Text to Speech",
        slug: "text-to-speech",
        category: ToolCategory::Ai,
        icon: "fa-volume-high",
        description: "Convert any text into natural-sounding audio.",
        seo_title: "Natural Text-to-Speech Converter | Toolly.online",
        seo_description: "Generate AI voiceovers from text using high-quality voices.",
        keywords: &["tts", "text to speech", "audio", "voiceover"],
        is_premium: false,
    },
    Definition {
        id: "word-count",
        name: "Word Counter",
        slug: "word-counter",
        category: ToolCategory::Text,
        icon: "fa-list-ol",
        description: "Count words, characters, and reading time of your text.",
        seo_title: "Free Word & Character Counter | Toolly.online",
        seo_description: "Detailed text analysis including word count, characters, and density.",
        keywords: &["word count", "character count", "analyzer", "text"],
        is_premium: false,
    },
    Definition {
        id: "color-picker",
        name: "Color Picker",
        slug: "color-picker",
        category: ToolCategory::Developer,
        icon: "fa-palette",
        description: "Pick colors and convert between HEX and RGB values.",
        seo_title: "Online Color Picker - HEX to RGB | Toolly.online",
        seo_description: "Pick any color and copy its HEX or RGB code with opacity previews.",
        keywords: &["color", "picker", "hex", "rgb"],
        is_premium: false,
    },
    Definition {
        id: "lorem-gen",
        name: "Lorem Ipsum Generator",
        slug: "lorem-ipsum-generator",
        category: ToolCategory::Text,
        icon: "fa-paragraph",
        description: "Generate placeholder paragraphs, sentences, or words.",
        seo_title: "Lorem Ipsum Generator | Toolly.online",
        seo_description: "Generate dummy text for layouts and mockups in one click.",
        keywords: &["lorem ipsum", "placeholder", "dummy text"],
        is_premium: false,
    },
    Definition {
        id: "md-editor",
        name: "Markdown Editor",
        slug: "markdown-editor",
        category: ToolCategory::Developer,
        icon: "fa-brands fa-markdown",
        description: "Write Markdown and see a live preview side by side.",
        seo_title: "Online Markdown Editor with Live Preview | Toolly.online",
        seo_description: "Write and preview Markdown instantly in your browser.",
        keywords: &["markdown", "editor", "preview", "md"],
        is_premium: false,
    },
    Definition {
        id: "b64-tool",
        name: "Base64 Encoder/Decoder",
        slug: "base64-encoder-decoder",
        category: ToolCategory::Developer,
        icon: "fa-lock",
        description: "Encode text to Base64 or decode Base64 back to text.",
        seo_title: "Base64 Encode & Decode Online | Toolly.online",
        seo_description: "Convert text to and from Base64 instantly.",
        keywords: &["base64", "encode", "decode"],
        is_premium: false,
    },
    Definition {
        id: "stopwatch",
        name: "Online Stopwatch",
        slug: "online-stopwatch",
        category: ToolCategory::Utility,
        icon: "fa-stopwatch",
        description: "A precise stopwatch with centisecond display.",
        seo_title: "Free Online Stopwatch | Toolly.online",
        seo_description: "Start, stop and reset a precise online stopwatch.",
        keywords: &["stopwatch", "timer", "clock"],
        is_premium: false,
    },
    Definition {
        id: "ip-info",
        name: "What Is My IP",
        slug: "what-is-my-ip",
        category: ToolCategory::Utility,
        icon: "fa-network-wired",
        description: "See your public IP address, ISP, and location.",
        seo_title: "What Is My IP Address? | Toolly.online",
        seo_description: "Check your public IP, ISP, city, country and timezone.",
        keywords: &["ip", "address", "location", "isp"],
        is_premium: false,
    },
    Definition {
        id: "html-min",
        name: "HTML Minifier",
        slug: "html-minifier",
        category: ToolCategory::Developer,
        icon: "fa-brands fa-html5",
        description: "Strip whitespace between tags to shrink HTML.",
        seo_title: "HTML Minifier | Toolly.online",
        seo_description: "Compress HTML by collapsing whitespace.",
        keywords: &["html", "minify", "compress"],
        is_premium: false,
    },
    Definition {
        id: "css-min",
        name: "CSS Minifier",
        slug: "css-minifier",
        category: ToolCategory::Developer,
        icon: "fa-brands fa-css3-alt",
        description: "Remove comments and whitespace from stylesheets.",
        seo_title: "CSS Minifier | Toolly.online",
        seo_description: "Compress CSS by removing comments and whitespace.",
        keywords: &["css", "minify", "compress"],
        is_premium: false,
    },
    Definition {
        id: "js-min",
        name: "JavaScript Minifier",
        slug: "javascript-minifier",
        category: ToolCategory::Developer,
        icon: "fa-brands fa-js",
        description: "Strip comments and collapse whitespace in JavaScript.",
        seo_title: "JavaScript Minifier | Toolly.online",
        seo_description: "Compress JavaScript by removing comments and whitespace.",
        keywords: &["javascript", "js", "minify"],
        is_premium: false,
    },
    Definition {
        id: "emoji-conv",
        name: "Emoji Converter",
        slug: "emoji-converter",
        category: ToolCategory::Social,
        icon: "fa-face-smile",
        description: "Turn words like happy, fire, or rocket into emoji.",
        seo_title: "Text to Emoji Converter | Toolly.online",
        seo_description: "Spice up posts by converting words into emoji.",
        keywords: &["emoji", "converter", "social"],
        is_premium: false,
    },
    Definition {
        id: "notepad",
        name: "Online Notepad",
        slug: "online-notepad",
        category: ToolCategory::Text,
        icon: "fa-note-sticky",
        description: "A distraction-free notepad that remembers your notes.",
        seo_title: "Free Online Notepad | Toolly.online",
        seo_description: "Write notes that are saved automatically.",
        keywords: &["notepad", "notes", "text editor"],
        is_premium: false,
    },
    Definition {
        id: "speech-text",
        name: "Speech to Text",
        slug: "speech-to-text",
        category: ToolCategory::Ai,
        icon: "fa-microphone",
        description: "Transcribe your voice into text in real time.",
        seo_title: "Speech to Text Converter | Toolly.online",
        seo_description: "Dictate and transcribe speech into editable text.",
        keywords: &["speech to text", "dictation", "transcribe"],
        is_premium: false,
    },
    Definition {
        id: "img-pdf",
        name: "Image to PDF",
        slug: "image-to-pdf",
        category: ToolCategory::Media,
        icon: "fa-file-pdf",
        description: "Combine images into a single PDF document.",
        seo_title: "Convert Images to PDF | Toolly.online",
        seo_description: "Merge JPG and PNG images into one PDF file.",
        keywords: &["image to pdf", "jpg to pdf", "converter"],
        is_premium: false,
    },
    Definition {
        id: "pdf-comp",
        name: "PDF Compressor",
        slug: "pdf-compressor",
        category: ToolCategory::Media,
        icon: "fa-file-zipper",
        description: "Shrink PDF files for email and upload.",
        seo_title: "Compress PDF Online | Toolly.online",
        seo_description: "Reduce PDF file size while keeping documents readable.",
        keywords: &["pdf", "compress", "reduce size"],
        is_premium: true,
    },
    Definition {
        id: "video-conv",
        name: "Video Converter",
        slug: "video-converter",
        category: ToolCategory::Media,
        icon: "fa-film",
        description: "Convert videos between popular formats.",
        seo_title: "Online Video Converter | Toolly.online",
        seo_description: "Convert MP4, WebM and MOV files in your browser.",
        keywords: &["video", "converter", "mp4"],
        is_premium: true,
    },
    Definition {
        id: "social-resize",
        name: "Social Image Resizer",
        slug: "social-image-resizer",
        category: ToolCategory::Social,
        icon: "fa-crop",
        description: "Resize images for every social network's post format.",
        seo_title: "Social Media Image Resizer | Toolly.online",
        seo_description: "Crop and resize images for Instagram, X, and Facebook.",
        keywords: &["social", "resize", "instagram"],
        is_premium: false,
    },
];

/// Build the built-in tool records in display order.
pub fn builtin_records() -> Vec<ToolRecord> {
    DEFINITIONS
        .iter()
        .map(|d| ToolRecord {
            id: d.id.to_string(),
            name: d.name.to_string(),
            description: d.description.to_string(),
            slug: d.slug.to_string(),
            icon: d.icon.to_string(),
            category: d.category,
            seo_title: d.seo_title.to_string(),
            seo_description: d.seo_description.to_string(),
            keywords: d.keywords.iter().map(|k| k.to_string()).collect(),
            is_premium: d.is_premium,
            status: ToolStatus::Active,
        })
        .collect()
}
