mod task_filter;
