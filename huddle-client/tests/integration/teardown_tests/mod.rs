mod test_leave_room;
