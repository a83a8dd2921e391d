mod test_capture_failure_stays_idle;
