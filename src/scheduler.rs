use super::*;

/// Deferred work the page schedules on its virtual clock.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TimerTask {
    ClearBorderColor(NodeId),
    BookingResult,
    CounterFrame {
        node: NodeId,
        current: f64,
        target: f64,
        increment: f64,
    },
    ToastExit(NodeId),
    RemoveNode(NodeId),
    CarouselAutoplay,
    CarouselResize,
    FocusFirstInput(NodeId),
    LoaderHide(NodeId),
    LoaderDetach(NodeId),
    HeroPrepare(NodeId),
    HeroSettle(NodeId),
}

impl TimerTask {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::ClearBorderColor(_) => "clear-border-color",
            Self::BookingResult => "booking-result",
            Self::CounterFrame { .. } => "counter-frame",
            Self::ToastExit(_) => "toast-exit",
            Self::RemoveNode(_) => "remove-node",
            Self::CarouselAutoplay => "carousel-autoplay",
            Self::CarouselResize => "carousel-resize",
            Self::FocusFirstInput(_) => "focus-first-input",
            Self::LoaderHide(_) => "loader-hide",
            Self::LoaderDetach(_) => "loader-detach",
            Self::HeroPrepare(_) => "hero-prepare",
            Self::HeroSettle(_) => "hero-settle",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ScheduledTask {
    id: i64,
    due_at: i64,
    order: i64,
    interval_ms: Option<i64>,
    task: TimerTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: i64,
    pub due_at: i64,
    pub order: i64,
    pub interval_ms: Option<i64>,
    /// Short name of the scheduled work, e.g. `toast-exit`.
    pub kind: &'static str,
}

#[derive(Debug)]
pub(crate) struct SchedulerState {
    task_queue: Vec<ScheduledTask>,
    pub(crate) now_ms: i64,
    pub(crate) timer_step_limit: usize,
    next_timer_id: i64,
    next_task_order: i64,
    running_timer_id: Option<i64>,
    running_timer_canceled: bool,
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self {
            task_queue: Vec::new(),
            now_ms: 0,
            timer_step_limit: 10_000,
            next_timer_id: 1,
            next_task_order: 0,
            running_timer_id: None,
            running_timer_canceled: false,
        }
    }
}

impl SchedulerState {
    fn allocate_timer_id(&mut self) -> i64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        id
    }

    fn allocate_task_order(&mut self) -> i64 {
        let order = self.next_task_order;
        self.next_task_order += 1;
        order
    }

    fn push(&mut self, delay_ms: i64, interval_ms: Option<i64>, task: TimerTask) -> i64 {
        let id = self.allocate_timer_id();
        let order = self.allocate_task_order();
        self.task_queue.push(ScheduledTask {
            id,
            due_at: self.now_ms.saturating_add(delay_ms.max(0)),
            order,
            interval_ms,
            task,
        });
        id
    }

    fn next_task_index(&self, due_limit: Option<i64>) -> Option<usize> {
        self.task_queue
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }
}

impl Page {
    pub(crate) fn set_timeout(&mut self, task: TimerTask, delay_ms: i64) -> i64 {
        let kind = task.kind();
        let id = self.scheduler.push(delay_ms, None, task);
        self.trace_timer_line(format!(
            "[timer] schedule timeout id={id} kind={kind} delay_ms={delay_ms}"
        ));
        id
    }

    pub(crate) fn set_interval(&mut self, task: TimerTask, interval_ms: i64) -> i64 {
        let kind = task.kind();
        let interval_ms = interval_ms.max(0);
        let id = self.scheduler.push(interval_ms, Some(interval_ms), task);
        self.trace_timer_line(format!(
            "[timer] schedule interval id={id} kind={kind} interval_ms={interval_ms}"
        ));
        id
    }

    pub(crate) fn request_animation_frame(&mut self, task: TimerTask) -> i64 {
        let frame_ms = self.config.animation.frame_interval_ms;
        self.set_timeout(task, frame_ms)
    }

    pub(crate) fn clear_timeout(&mut self, timer_id: i64) {
        let before = self.scheduler.task_queue.len();
        self.scheduler.task_queue.retain(|task| task.id != timer_id);
        let removed = before != self.scheduler.task_queue.len();
        let running = self.scheduler.running_timer_id == Some(timer_id);
        if running {
            self.scheduler.running_timer_canceled = true;
        }
        self.trace_timer_line(format!(
            "[timer] clear id={timer_id} removed={removed} running={running}"
        ));
    }

    pub fn now_ms(&self) -> i64 {
        self.scheduler.now_ms
    }

    pub fn clear_timer(&mut self, timer_id: i64) -> bool {
        let existed = self.scheduler.running_timer_id == Some(timer_id)
            || self
                .scheduler
                .task_queue
                .iter()
                .any(|task| task.id == timer_id);
        self.clear_timeout(timer_id);
        existed
    }

    pub fn clear_all_timers(&mut self) -> usize {
        let cleared = self.scheduler.task_queue.len();
        self.scheduler.task_queue.clear();
        if self.scheduler.running_timer_id.is_some() {
            self.scheduler.running_timer_canceled = true;
        }
        self.trace_timer_line(format!("[timer] clear_all cleared={cleared}"));
        cleared
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        let mut timers = self
            .scheduler
            .task_queue
            .iter()
            .map(|task| PendingTimer {
                id: task.id,
                due_at: task.due_at,
                order: task.order,
                interval_ms: task.interval_ms,
                kind: task.task.kind(),
            })
            .collect::<Vec<_>>();
        timers.sort_by_key(|timer| (timer.due_at, timer.order));
        timers
    }

    pub fn set_timer_step_limit(&mut self, max_steps: usize) -> Result<()> {
        if max_steps == 0 {
            return Err(Error::Timer(
                "set_timer_step_limit requires at least 1 step".into(),
            ));
        }
        self.scheduler.timer_step_limit = max_steps;
        Ok(())
    }

    pub fn advance_time(&mut self, delta_ms: i64) -> Result<()> {
        if delta_ms < 0 {
            return Err(Error::Timer(
                "advance_time requires non-negative milliseconds".into(),
            ));
        }
        let target = self.scheduler.now_ms.saturating_add(delta_ms);
        let from = self.scheduler.now_ms;
        let ran = self.run_timer_queue(Some(target), true)?;
        self.scheduler.now_ms = target;
        self.trace_timer_line(format!(
            "[timer] advance delta_ms={delta_ms} from={from} to={target} ran_due={ran}"
        ));
        Ok(())
    }

    pub fn advance_time_to(&mut self, target_ms: i64) -> Result<()> {
        if target_ms < self.scheduler.now_ms {
            return Err(Error::Timer(format!(
                "advance_time_to requires target >= now_ms (target={target_ms}, now_ms={})",
                self.scheduler.now_ms
            )));
        }
        let from = self.scheduler.now_ms;
        let ran = self.run_timer_queue(Some(target_ms), true)?;
        self.scheduler.now_ms = target_ms;
        self.trace_timer_line(format!(
            "[timer] advance_to from={from} to={target_ms} ran_due={ran}"
        ));
        Ok(())
    }

    /// Runs every pending timer, moving the clock forward as needed. Fails when
    /// the queue never drains, e.g. while the carousel autoplay is running.
    pub fn flush(&mut self) -> Result<()> {
        let from = self.scheduler.now_ms;
        let ran = self.run_timer_queue(None, true)?;
        self.trace_timer_line(format!(
            "[timer] flush from={from} to={} ran={ran}",
            self.scheduler.now_ms
        ));
        Ok(())
    }

    pub fn run_next_timer(&mut self) -> Result<bool> {
        let Some(next_idx) = self.scheduler.next_task_index(None) else {
            self.trace_timer_line("[timer] run_next none".into());
            return Ok(false);
        };

        let task = self.scheduler.task_queue.remove(next_idx);
        if task.due_at > self.scheduler.now_ms {
            self.scheduler.now_ms = task.due_at;
        }
        self.execute_timer_task(task)?;
        Ok(true)
    }

    pub fn run_due_timers(&mut self) -> Result<usize> {
        let ran = self.run_timer_queue(Some(self.scheduler.now_ms), false)?;
        self.trace_timer_line(format!(
            "[timer] run_due now_ms={} ran={ran}",
            self.scheduler.now_ms
        ));
        Ok(ran)
    }

    // Timers due before `due_limit` run in (due_at, order) order with the clock
    // set to their due time, so chained timers observe the right `now`.
    fn run_timer_queue(&mut self, due_limit: Option<i64>, advance_clock: bool) -> Result<usize> {
        let mut steps = 0usize;
        while let Some(next_idx) = self.scheduler.next_task_index(due_limit) {
            steps += 1;
            if steps > self.scheduler.timer_step_limit {
                return Err(self.timer_step_limit_error(steps, due_limit));
            }
            let task = self.scheduler.task_queue.remove(next_idx);
            if advance_clock && task.due_at > self.scheduler.now_ms {
                self.scheduler.now_ms = task.due_at;
            }
            self.execute_timer_task(task)?;
        }
        Ok(steps)
    }

    fn timer_step_limit_error(&self, steps: usize, due_limit: Option<i64>) -> Error {
        let due_limit_desc = due_limit
            .map(|value| value.to_string())
            .unwrap_or_else(|| "none".into());

        let next_task_desc = self
            .scheduler
            .next_task_index(due_limit)
            .and_then(|idx| self.scheduler.task_queue.get(idx))
            .map(|task| {
                format!(
                    "id={},kind={},due_at={},interval_ms={}",
                    task.id,
                    task.task.kind(),
                    task.due_at,
                    task.interval_ms
                        .map(|value| value.to_string())
                        .unwrap_or_else(|| "none".into())
                )
            })
            .unwrap_or_else(|| "none".into());

        Error::Timer(format!(
            "flush exceeded max task steps (possible running interval): limit={}, steps={steps}, now_ms={}, due_limit={due_limit_desc}, pending_tasks={}, next_task={next_task_desc}",
            self.scheduler.timer_step_limit,
            self.scheduler.now_ms,
            self.scheduler.task_queue.len(),
        ))
    }

    fn execute_timer_task(&mut self, task: ScheduledTask) -> Result<()> {
        stacker::grow(crate::page::USER_ACTION_STACK_SIZE, || self.execute_timer_task_impl(task))
    }

    fn execute_timer_task_impl(&mut self, task: ScheduledTask) -> Result<()> {
        self.trace_timer_line(format!(
            "[timer] run id={} kind={} due_at={} now_ms={}",
            task.id,
            task.task.kind(),
            task.due_at,
            self.scheduler.now_ms
        ));

        self.scheduler.running_timer_id = Some(task.id);
        self.scheduler.running_timer_canceled = false;
        // timer callbacks report failures like any other listener
        if let Err(err) = self.run_timer_task(&task.task) {
            self.report_error(err);
        }
        let canceled = self.scheduler.running_timer_canceled;
        self.scheduler.running_timer_id = None;
        self.scheduler.running_timer_canceled = false;

        if let Some(interval_ms) = task.interval_ms {
            if !canceled {
                let due_at = task.due_at.saturating_add(interval_ms);
                let order = self.scheduler.allocate_task_order();
                self.trace_timer_line(format!(
                    "[timer] requeue id={} due_at={due_at} interval_ms={interval_ms}",
                    task.id
                ));
                self.scheduler.task_queue.push(ScheduledTask {
                    id: task.id,
                    due_at,
                    order,
                    interval_ms: Some(interval_ms),
                    task: task.task,
                });
            }
        }

        Ok(())
    }

    fn run_timer_task(&mut self, task: &TimerTask) -> Result<()> {
        match task {
            TimerTask::ClearBorderColor(node) => self.dom.style_set(*node, "border-color", ""),
            TimerTask::BookingResult => {
                self.show_notification("Found amazing options! Redirecting...", ToastKind::Success)
            }
            TimerTask::CounterFrame {
                node,
                current,
                target,
                increment,
            } => self.counter_step(*node, *current, *target, *increment),
            TimerTask::ToastExit(node) => self.toast_exit(*node),
            TimerTask::RemoveNode(node) => self.dom.remove_node(*node),
            TimerTask::CarouselAutoplay => self.autoplay_tick(),
            TimerTask::CarouselResize => self.carousel_resize_settled(),
            TimerTask::FocusFirstInput(section) => self.focus_first_input(*section),
            TimerTask::LoaderHide(loader) => self.hide_loader(*loader),
            TimerTask::LoaderDetach(loader) => self.dom.style_set(*loader, "display", "none"),
            TimerTask::HeroPrepare(node) => self.prepare_hero_element(*node),
            TimerTask::HeroSettle(node) => self.settle_hero_element(*node),
        }
    }
}
