use rps_hands::Sign;

/// The computer side of the table.
///
/// Asked exactly once per round, at the instant the player's sign locks in.
pub trait Opponent {
    fn throw(&mut self) -> Sign;
}

impl<O> Opponent for Box<O>
where
    O: Opponent + ?Sized,
{
    fn throw(&mut self) -> Sign {
        (**self).throw()
    }
}
