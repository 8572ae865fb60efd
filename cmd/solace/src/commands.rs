//! Line commands understood by the terminal front end.

use anyhow::{anyhow, bail};

use domains::{CommentId, ExpressionId, MoodTag, PostId, ResourceCategory, ResourceId};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Moods,
    Feed,
    Post { mood: Option<MoodTag>, body: String },
    Thread(PostId),
    Comment { post: PostId, body: String },
    React { post: PostId, comment: Option<CommentId> },
    Express,
    ExpressPost { mood: Option<MoodTag>, body: String },
    ExpressReact(ExpressionId),
    Journal,
    Entry { mood: i64, title: String, body: String, tags: String },
    Resources { category: Option<ResourceCategory>, search: String },
    Resource(ResourceId),
    Chat(String),
    Json,
    Quit,
}

pub const HELP: &str = "\
commands:
  feed                                  community feed
  post [mood] <text>                    share with the community
  thread <post>                         show a post's comments
  comment <post> <text>                 send support
  react <post> [comment]                add a heart
  express                               expression feed
  express-post [mood] <text>            share anonymously
  express-react <post>                  add a heart
  journal                               entries, average mood, stats
  entry <1-5> <title> | <body> | <tags> write a journal entry
  resources [category|all] [search]     browse the library
  resource <id>                         read a resource
  chat <text>                           talk to the companion
  moods                                 list mood tags
  json                                  dump the community feed as JSON
  quit";

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb {
            "help" | "?" => Command::Help,
            "moods" => Command::Moods,
            "feed" => Command::Feed,
            "post" => {
                let (mood, body) = mood_and_body(rest)?;
                Command::Post { mood, body }
            }
            "thread" => Command::Thread(required(rest, "post id")?.into()),
            "comment" => {
                let (post, body) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("usage: comment <post> <text>"))?;
                Command::Comment { post: post.into(), body: body.to_owned() }
            }
            "react" => {
                let mut ids = rest.split_whitespace();
                let post = ids.next().ok_or_else(|| anyhow!("usage: react <post> [comment]"))?;
                Command::React { post: post.into(), comment: ids.next().map(CommentId::from) }
            }
            "express" => Command::Express,
            "express-post" => {
                let (mood, body) = mood_and_body(rest)?;
                Command::ExpressPost { mood, body }
            }
            "express-react" => Command::ExpressReact(required(rest, "post id")?.into()),
            "journal" => Command::Journal,
            "entry" => parse_entry(rest)?,
            "resources" => {
                let (first, search) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match ResourceCategory::parse_filter(first) {
                    Ok(category) => {
                        Command::Resources { category, search: search.trim().to_owned() }
                    }
                    // Not a category: the whole remainder is the search term.
                    Err(_) => Command::Resources { category: None, search: rest.to_owned() },
                }
            }
            "resource" => Command::Resource(required(rest, "resource id")?.into()),
            "chat" => Command::Chat(rest.to_owned()),
            "json" => Command::Json,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{other}', try 'help'"),
        };
        Ok(command)
    }
}

fn required<'a>(rest: &'a str, what: &str) -> anyhow::Result<&'a str> {
    rest.split_whitespace().next().ok_or_else(|| anyhow!("missing {what}"))
}

/// `-` means no mood. A leading word that is neither a mood nor an emoji
/// starts the body. Body validation is left to the services.
fn mood_and_body(rest: &str) -> anyhow::Result<(Option<MoodTag>, String)> {
    let (first, body) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if first.is_empty() || first == "-" {
        return Ok((None, body.trim().to_owned()));
    }
    match first.parse::<MoodTag>() {
        Ok(mood) => Ok((Some(mood), body.trim().to_owned())),
        Err(e) if !first.chars().any(char::is_alphanumeric) => Err(e.into()),
        Err(_) => Ok((None, rest.to_owned())),
    }
}

fn parse_entry(rest: &str) -> anyhow::Result<Command> {
    let (mood, remainder) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("usage: entry <1-5> <title> | <body> | <tags>"))?;
    let mood: i64 = mood.parse().map_err(|_| anyhow!("mood must be a number from 1 to 5"))?;

    let mut parts = remainder.splitn(3, '|').map(str::trim);
    Ok(Command::Entry {
        mood,
        title: parts.next().unwrap_or_default().to_owned(),
        body: parts.next().unwrap_or_default().to_owned(),
        tags: parts.next().unwrap_or_default().to_owned(),
    })
}
