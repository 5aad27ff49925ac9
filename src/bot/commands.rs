use serenity::all::{
    CommandDataOptionValue, CommandOptionType, CreateCommand, CreateCommandOption,
    InstallationContext, InteractionContext,
};

use crate::extract::OptionValue;

pub const VIDEO_COMMAND: &str = "video";

pub const QUALITY_CHOICES: [(&str, &str); 10] = [
    ("144p", "144"),
    ("240p", "240"),
    ("360p", "360"),
    ("480p", "480"),
    ("720p", "720"),
    ("1080p", "1080"),
    ("1440p (2K)", "1440"),
    ("2160p (4K)", "2160"),
    ("4320p (8K)", "4320"),
    ("Maximum quality", "max"),
];

pub const MODE_CHOICES: [(&str, &str); 3] = [
    ("Auto (default)", "auto"),
    ("Audio only", "audio"),
    ("No audio (muted video)", "mute"),
];

fn string_option(
    name: &str,
    description: &str,
    choices: &[(&str, &str)],
) -> CreateCommandOption {
    choices.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, name, description),
        |option, (label, value)| option.add_string_choice(*label, *value),
    )
}

/// The `/video` slash command.
pub fn video_command() -> CreateCommand {
    CreateCommand::new(VIDEO_COMMAND)
        .description("Download video from a social media URL")
        .integration_types(vec![InstallationContext::Guild, InstallationContext::User])
        .contexts(vec![
            InteractionContext::Guild,
            InteractionContext::BotDm,
            InteractionContext::PrivateChannel,
        ])
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "url",
                "URL of the video to download",
            )
            .required(true),
        )
        .add_option(string_option(
            "quality",
            "Video quality (144, 240, 360, 480, 720, 1080, 1440, 2160, 4320, max)",
            &QUALITY_CHOICES,
        ))
        .add_option(string_option("mode", "Download mode", &MODE_CHOICES))
}

pub fn all() -> Vec<CreateCommand> {
    vec![video_command()]
}

/// Arguments of a `/video` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoArgs {
    pub url: String,
    pub options: Vec<(String, OptionValue)>,
}

/// Split interaction options into the URL and the mapper's raw options.
///
/// Returns `None` when the URL is missing or blank.
pub fn parse_video_options<'a, I>(options: I) -> Option<VideoArgs>
where
    I: IntoIterator<Item = (&'a str, &'a CommandDataOptionValue)>,
{
    let mut url = None;
    let mut raw = Vec::new();

    for (name, value) in options {
        let value = match value {
            CommandDataOptionValue::String(s) => OptionValue::Text(s.clone()),
            CommandDataOptionValue::Boolean(b) => OptionValue::Flag(*b),
            _ => continue,
        };
        match (name, value) {
            ("url", OptionValue::Text(s)) => url = Some(s.trim().to_string()),
            (name, value) => raw.push((name.to_string(), value)),
        }
    }

    url.filter(|u| !u.is_empty()).map(|url| VideoArgs { url, options: raw })
}
