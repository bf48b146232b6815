//! Typed form of turtle commands *before* they are lowered to Python.

/// Fixed table of turtle operations the dialect knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `fd n` / `forward n`
    Forward,
    /// `bk n` / `back n` / `backward n`
    Back,
    /// `rt deg` / `right deg`
    Right,
    /// `lt deg` / `left deg`
    Left,
    /// `pu` / `penup`
    PenUp,
    /// `pd` / `pendown`
    PenDown,
    /// `print expr …` – prints everything after the command name.
    Print,
    ClearScreen,
    Home,
    HideTurtle,
    ShowTurtle,
    /// `seth deg` / `setheading deg`
    SetHeading,
}

impl Builtin {
    /// Looks up a command name. Matching ignores case.
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name.to_ascii_lowercase().as_str() {
            "fd" | "forward" => Self::Forward,
            "bk" | "back" | "backward" => Self::Back,
            "rt" | "right" => Self::Right,
            "lt" | "left" => Self::Left,
            "pu" | "penup" => Self::PenUp,
            "pd" | "pendown" => Self::PenDown,
            "print" => Self::Print,
            "cs" | "clearscreen" => Self::ClearScreen,
            "home" => Self::Home,
            "ht" | "hideturtle" => Self::HideTurtle,
            "st" | "showturtle" => Self::ShowTurtle,
            "seth" | "setheading" => Self::SetHeading,
            _ => return None,
        };
        Some(op)
    }

    /// Number of inputs the command consumes when it sits inside a block.
    pub fn arity(self) -> usize {
        match self {
            Self::Forward | Self::Back | Self::Right | Self::Left | Self::Print => 1,
            Self::SetHeading => 1,
            Self::PenUp | Self::PenDown => 0,
            Self::ClearScreen | Self::Home | Self::HideTurtle | Self::ShowTurtle => 0,
        }
    }

    /// Python statement for this command. The inputs are joined with a
    /// space, so `fd 10 + 5` stays a single expression.
    pub fn render(self, args: &[String]) -> String {
        let expr = args.join(" ");
        match self {
            Self::Forward => format!("turtle.forward({expr})"),
            Self::Back => format!("turtle.backward({expr})"),
            Self::Right => format!("turtle.right({expr})"),
            Self::Left => format!("turtle.left({expr})"),
            Self::SetHeading => format!("turtle.setheading({expr})"),
            Self::Print => format!("print({expr})"),
            Self::PenUp => "turtle.penup()".to_string(),
            Self::PenDown => "turtle.pendown()".to_string(),
            Self::ClearScreen => "turtle.clearscreen()".to_string(),
            Self::Home => "turtle.home()".to_string(),
            Self::HideTurtle => "turtle.hideturtle()".to_string(),
            Self::ShowTurtle => "turtle.showturtle()".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Built-in turtle operation with its normalised inputs.
    Builtin { op: Builtin, args: Vec<String> },

    /// `repeat <count> [ … ]`.
    Repeat { count: String, body: Vec<Command> },

    /// Call to a procedure that was registered when the line was read.
    Call { name: String, args: Vec<String> },

    /// Anything else. `text` is the source echoed into a comment.
    Unknown { text: String },
}

/// One complete `to … end` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Procedure {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<String>,
}
