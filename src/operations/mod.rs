mod stroke_path;

pub use stroke_path::{
    FillRule, LineCap, LineJoin, PathCommand, StrokeAttributes, StrokeCommands, StrokePath,
};
