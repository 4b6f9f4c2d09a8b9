#[cfg(test)]
mod tests {
    use deskbreak::libs::instance::InstanceLock;

    #[test]
    fn test_lock_is_exclusive_and_released_on_drop() {
        // The port may legitimately be taken by something else on the host;
        // in that case there is nothing to assert.
        let Some(first) = InstanceLock::acquire() else {
            return;
        };

        // While held, a second acquisition must fail.
        assert!(InstanceLock::acquire().is_none());

        drop(first);
        assert!(InstanceLock::acquire().is_some());
    }
}
