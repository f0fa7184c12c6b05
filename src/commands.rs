use teloxide::types::ParseMode;
use teloxide::utils::markdown;

use crate::platform::Reply;

/// Commands the bot answers. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
}

/// A piece of the `/start` announcement, either literal or emphasised.
enum Segment {
    Plain(&'static str),
    Bold(&'static str),
}

const START_ANNOUNCEMENT: &[Segment] = &[
    Segment::Plain(
        "🤖 Initializing God’s Eye Bot...\n\
         ⏳ Booting intelligence core...\n\
         ✅ System ready.\n\n\
         Welcome to ",
    ),
    Segment::Bold("God’s Eye Bot"),
    Segment::Plain(" 🔥\nCreated by "),
    Segment::Bold("PH03NIX"),
    Segment::Plain(
        "\n\n\
         Commands:\n\
         /start – Welcome\n\
         /help – Help\n\n\
         POWERED BY PH03NIX",
    ),
];

pub const HELP_TEXT: &str = "More commands coming soon 🚀";

impl Command {
    /// Parse the leading command token of a message.
    ///
    /// The token must sit at the very start of the text and match exactly,
    /// with an optional `@BotName` suffix. Trailing arguments are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        if !text.starts_with('/') {
            return None;
        }
        let token = text.split_whitespace().next()?;
        let name = match token.split_once('@') {
            Some((name, _mention)) => name,
            None => token,
        };
        match name {
            "/start" => Some(Command::Start),
            "/help" => Some(Command::Help),
            _ => None,
        }
    }

    /// The canned reply for this command, addressed to `chat_id`.
    pub fn reply(self, chat_id: i64) -> Reply {
        match self {
            Command::Start => Reply {
                chat_id,
                text: start_announcement_markdown(),
                parse_mode: Some(ParseMode::MarkdownV2),
            },
            Command::Help => Reply {
                chat_id,
                text: HELP_TEXT.to_string(),
                parse_mode: None,
            },
        }
    }
}

/// The `/start` announcement escaped for Telegram MarkdownV2.
pub fn start_announcement_markdown() -> String {
    START_ANNOUNCEMENT
        .iter()
        .map(|segment| match segment {
            Segment::Plain(s) => markdown::escape(s),
            Segment::Bold(s) => markdown::bold(&markdown::escape(s)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
    }

    #[test]
    fn test_parse_ignores_arguments_and_mentions() {
        assert_eq!(Command::parse("/start ref123"), Some(Command::Start));
        assert_eq!(Command::parse("/start\nmore"), Some(Command::Start));
        assert_eq!(Command::parse("/help@GodsEyeBot"), Some(Command::Help));
        assert_eq!(Command::parse("/start@GodsEyeBot now"), Some(Command::Start));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for text in [
            "",
            "   ",
            "hello",
            "/ping",
            "/starts",
            "/hlep",
            "/Start",
            "/HELP",
            "start",
            "hello /start",
            " /start",
        ] {
            assert_eq!(Command::parse(text), None, "{text:?} should not match");
        }
    }

    #[test]
    fn test_start_reply_uses_markdown_v2() {
        let reply = Command::Start.reply(42);
        assert_eq!(reply.chat_id, 42);
        assert_eq!(reply.parse_mode, Some(ParseMode::MarkdownV2));
        assert!(reply.text.contains("*God’s Eye Bot*"));
        assert!(reply.text.contains("*PH03NIX*"));
        assert!(reply.text.contains("Initializing God’s Eye Bot\\.\\.\\."));
        assert!(reply.text.ends_with("POWERED BY PH03NIX"));
    }

    #[test]
    fn test_start_announcement_lists_commands() {
        let text = start_announcement_markdown();
        assert!(text.starts_with("🤖 Initializing God’s Eye Bot"));
        assert!(text.contains("Welcome to *God’s Eye Bot* 🔥\nCreated by *PH03NIX*\n\n"));
        assert!(text.contains("Commands:\n/start – Welcome\n/help – Help\n\n"));
    }

    #[test]
    fn test_start_announcement_full_text() {
        let expected = "🤖 Initializing God’s Eye Bot\\.\\.\\.\n\
                        ⏳ Booting intelligence core\\.\\.\\.\n\
                        ✅ System ready\\.\n\n\
                        Welcome to *God’s Eye Bot* 🔥\n\
                        Created by *PH03NIX*\n\n\
                        Commands:\n\
                        /start – Welcome\n\
                        /help – Help\n\n\
                        POWERED BY PH03NIX";
        assert_eq!(start_announcement_markdown(), expected);
        assert_eq!(Command::Start.reply(1).text, expected);
    }

    #[test]
    fn test_help_reply_is_plain() {
        let reply = Command::Help.reply(-7);
        assert_eq!(reply.chat_id, -7);
        assert_eq!(reply.text, HELP_TEXT);
        assert_eq!(reply.parse_mode, None);
    }
}
