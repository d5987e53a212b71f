use crate::Logger;

/// RAII guard that keeps a [`Logger`] one nesting level deeper.
///
/// Created by [`Logger::nested`]. Output written through the guard, or
/// through further guards nested inside it, is indented one more unit than
/// output written before it. Dropping the guard restores the previous depth.
/// The guard implements [`Deref`](std::ops::Deref) and
/// [`DerefMut`](std::ops::DerefMut), so recursive build steps pass
/// `&mut *guard` wherever a `&mut Logger` is expected.
#[must_use = "dropping the guard immediately restores the previous depth"]
pub struct NestingGuard<'a, L, C> {
    logger: &'a mut Logger<L, C>,
}

impl<'a, L, C> NestingGuard<'a, L, C> {
    pub(crate) fn new(logger: &'a mut Logger<L, C>) -> Self {
        logger.enter();
        Self { logger }
    }
}

impl<L, C> Drop for NestingGuard<'_, L, C> {
    fn drop(&mut self) {
        self.logger.leave();
    }
}

impl<L, C> std::ops::Deref for NestingGuard<'_, L, C> {
    type Target = Logger<L, C>;

    fn deref(&self) -> &Self::Target {
        self.logger
    }
}

impl<L, C> std::ops::DerefMut for NestingGuard<'_, L, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
    }
}

#[cfg(test)]
mod tests {
    use crate::{Logger, Settings};

    fn make_logger() -> Logger<Vec<u8>, Vec<u8>> {
        Logger::from_settings(&Settings::default(), Some(Vec::new()), Vec::new())
    }

    #[test]
    fn guard_raises_depth_while_alive() {
        let mut logger = make_logger();
        {
            let guard = logger.nested();
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(logger.depth(), 0);
    }

    #[test]
    fn guards_stack() {
        let mut logger = make_logger();
        let mut outer = logger.nested();
        {
            let inner = outer.nested();
            assert_eq!(inner.depth(), 2);
        }
        assert_eq!(outer.depth(), 1);
    }

    #[test]
    fn deref_mut_reaches_logger() {
        fn depth_of(logger: &mut Logger<Vec<u8>, Vec<u8>>) -> usize {
            logger.depth()
        }

        let mut logger = make_logger();
        let mut guard = logger.nested();
        assert_eq!(depth_of(&mut guard), 1);
    }
}
